use crate::cli::SuggestArgs;
use crate::config::FileConfig;
use crate::error::Result;
use crate::ui::StageSpinner;
use chemscope::engine::suggestions;
use tracing::debug;

pub fn run(args: SuggestArgs, config: &FileConfig, quiet: bool) -> Result<()> {
    let client = config.client()?;

    let spinner = StageSpinner::start("Fetching suggestions", quiet);
    // Suggestion failures are indistinguishable from "no suggestions".
    let candidates = suggestions::fetch(&client, &args.query).unwrap_or_else(|error| {
        debug!("suggestion lookup failed: {error}");
        Vec::new()
    });
    spinner.clear();

    if candidates.is_empty() {
        println!("No suggestions found.");
    } else {
        for candidate in candidates {
            println!("{candidate}");
        }
    }
    Ok(())
}
