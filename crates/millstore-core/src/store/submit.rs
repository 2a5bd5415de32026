use super::{IntakeForm, Store, SubmitResponse};
use crate::error::{Result, StoreError};
use crate::workbook::{StagedWrite, require_sheet_mut};
use crate::{grid, ledger};
use tracing::{debug, info};

impl Store {
    /// Record an intake: append it to the ledger and update its bin.
    ///
    /// The position and the bin fields are validated before anything is
    /// loaded, and the workbook is persisted once, after both changes.
    pub fn submit_intake(&self, form: &IntakeForm) -> Result<SubmitResponse> {
        let _guard = self.write_lock.lock();
        self.stage_intake(form)?.commit()?;
        info!(
            position = form.position_name.as_deref().unwrap_or_default(),
            bin = %form.bin_label,
            "intake recorded"
        );
        Ok(SubmitResponse::success())
    }

    /// Build the post-submit workbook next to the target without replacing
    /// it. Callers must hold `write_lock` until the write is committed.
    pub(crate) fn stage_intake(&self, form: &IntakeForm) -> Result<StagedWrite> {
        let position_name = form
            .position_name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| StoreError::InvalidPosition(String::new()))?;
        let (position, raw) = grid::prepare_write(
            position_name,
            &form.bin_label,
            &form.material,
            &form.date,
            &form.vendor,
        )?;

        let mut book = self.file.snapshot()?;
        let row = ledger::append(
            require_sheet_mut(&mut book, &self.sheets.ledger)?,
            &form.to_transaction(),
        );
        grid::put(require_sheet_mut(&mut book, &self.sheets.map)?, position, &raw);

        let staged = self.file.stage(&book)?;
        debug!(%position, ledger_row = row, "intake staged");
        Ok(staged)
    }
}
