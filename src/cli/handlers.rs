use crate::load;

use super::commands::DumpArgs;

/// `lectern dump`: print the canonical project shape to stdout
pub fn cmd_dump(args: DumpArgs) -> Result<(), serde_json::Error> {
    let project = load::load();
    let out = if args.pretty {
        serde_json::to_string_pretty(&project)?
    } else {
        serde_json::to_string(&project)?
    };
    println!("{out}");
    Ok(())
}
