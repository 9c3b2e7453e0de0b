use anyhow::Result;

use photo_triage::{app, cli};

fn main() -> Result<()> {
    let args = cli::parse();
    app::run(args)
}
