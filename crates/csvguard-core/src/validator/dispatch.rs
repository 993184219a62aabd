use tracing::{debug, trace};

use crate::{
    compiler::ExecutableColumn, errors::CheckError, results::FileSummary,
    validator::FileContext,
};

/// Run the declared checks of every column against the table of `ctx`.
///
/// Columns run in declaration order, rules of a column too. A column missing
/// from the header fails before any of its rules run. The first failing check
/// stops the dispatch.
pub fn dispatch(
    ctx: &FileContext<'_>,
    columns: &[ExecutableColumn],
) -> Result<FileSummary, CheckError> {
    let mut summary = FileSummary::new(ctx.file().to_string(), ctx.table().num_rows());

    for column in columns {
        let index = ctx
            .table()
            .column_index(&column.name)
            .ok_or_else(|| CheckError::ColumnNotFound {
                file: ctx.file().to_string(),
                column: column.name.clone(),
            })?;

        for rule in &column.rules {
            trace!(column = %column.name, index, %rule, "running check");
            rule.check().validate(ctx, index)?;
            summary.rules_run += 1;
        }
        summary.columns_checked += 1;
    }

    debug!(
        file = ctx.file(),
        columns = summary.columns_checked,
        rules = summary.rules_run,
        "dispatch done"
    );
    Ok(summary)
}
