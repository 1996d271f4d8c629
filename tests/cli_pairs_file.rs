use std::fs;

use rankpairs::RankingPair;
use rankpairs::example_apps::run_generate_pairs;
use tempfile::tempdir;

const OBSERVATIONS: &str = "\
group_id\tlabel
# first query
1\t3.0
1\t1.0
1\t2.0
# second query
2\t0
2\t1
";

#[test]
fn generates_jsonl_pairs_from_observation_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("observations.tsv");
    let output = dir.path().join("pairs.jsonl");
    fs::write(&input, OBSERVATIONS).unwrap();

    run_generate_pairs(
        [
            "--input".to_string(),
            input.display().to_string(),
            "--output".to_string(),
            output.display().to_string(),
            "--format".to_string(),
            "jsonl".to_string(),
        ]
        .into_iter(),
    )
    .unwrap();

    let pairs: Vec<RankingPair> = fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let keys: Vec<_> = pairs.iter().map(|pair| (pair.winner, pair.loser)).collect();
    assert_eq!(keys, vec![(0, 1), (0, 2), (2, 1), (4, 3)]);
}

#[test]
fn capped_tsv_output_is_reproducible() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("observations.tsv");
    fs::write(&input, "1 1\n1 2\n1 3\n1 4\n").unwrap();

    let run = |name: &str| {
        let output = dir.path().join(name);
        run_generate_pairs(
            [
                "--input".to_string(),
                input.display().to_string(),
                "--output".to_string(),
                output.display().to_string(),
                "--max-pairs".to_string(),
                "2".to_string(),
                "--seed".to_string(),
                "11".to_string(),
            ]
            .into_iter(),
        )
        .unwrap();
        fs::read_to_string(output).unwrap()
    };

    let first = run("a.tsv");
    assert_eq!(first, run("b.tsv"));
    let rows: Vec<&str> = first.lines().collect();
    assert_eq!(rows[0], "winner\tloser\tweight");
    assert_eq!(rows.len(), 3);
}

#[test]
fn malformed_input_is_reported() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("broken.tsv");
    fs::write(&input, "1 1.0\n1 nope\n").unwrap();
    let err = run_generate_pairs(
        [
            "--input".to_string(),
            input.display().to_string(),
            "--output".to_string(),
            dir.path().join("out.tsv").display().to_string(),
        ]
        .into_iter(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("line 2"));
}
