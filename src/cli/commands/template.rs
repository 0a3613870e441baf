//! Template command: emit the source-template header for the mapping

use tracing::info;

use super::shared::{load_mapping, setup_logging, write_output};
use crate::Result;
use crate::app::services::csv::write_line;
use crate::cli::args::TemplateArgs;

/// Write the one-line CSV header operations staff can fill in
pub fn run_template(args: &TemplateArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false);

    let config = load_mapping(args.mapping.as_ref())?;
    let columns = config.template_columns();
    info!("Template has {} source columns", columns.len());

    write_output(args.output.as_ref(), &write_line(&columns))
}
