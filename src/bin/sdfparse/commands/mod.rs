mod tojson;

use tojson::run_tojson;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::ToJson(args) => run_tojson(args, ctx),
    }
}
