use super::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let session = Session::open(cfg)?;
        ExportLogic::export(
            &session.book,
            &session.ctx,
            *format,
            file,
            range.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
