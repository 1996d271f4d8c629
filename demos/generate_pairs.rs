use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    rankpairs::example_apps::run_generate_pairs(std::env::args().skip(1))
}
