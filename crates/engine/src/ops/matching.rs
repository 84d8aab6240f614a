use chrono::{DateTime, Utc};

use crate::{Engine, EngineError, ResultEngine, ThreeWayMatch, ThreeWayMatchPatch};

impl Engine {
    pub fn three_way_matches(&self) -> &[ThreeWayMatch] {
        self.three_way_matches.list()
    }

    pub fn three_way_match(&self, id: &str) -> ResultEngine<&ThreeWayMatch> {
        self.three_way_matches
            .get(id)
            .ok_or_else(|| EngineError::KeyNotFound(id.to_string()))
    }

    pub fn update_three_way_match(
        &mut self,
        id: &str,
        patch: ThreeWayMatchPatch,
    ) -> ResultEngine<ThreeWayMatch> {
        Ok(self
            .three_way_matches
            .update(id, |record| {
                if let Some(requires_review) = patch.requires_review {
                    record.requires_review = requires_review;
                }
                if let Some(match_successful) = patch.match_successful {
                    record.match_successful = match_successful;
                }
                if let Some(match_notes) = patch.match_notes {
                    record.match_notes = Some(match_notes);
                }
            })?
            .clone())
    }

    /// Ensures a match record exists for every line of an invoice.
    ///
    /// Lines without an id are skipped. Existing records are reused, so
    /// re-running for the same invoice neither duplicates nor rewrites
    /// anything. Returns the full set in invoice line order; only the newly
    /// created records are persisted.
    pub fn run_matches_for_invoice(
        &mut self,
        invoice_id: &str,
        matched_at: DateTime<Utc>,
    ) -> ResultEngine<Vec<ThreeWayMatch>> {
        let lines: Vec<(String, Option<String>)> = self
            .invoice(invoice_id)?
            .line_items
            .iter()
            .filter(|line| !line.id.trim().is_empty())
            .map(|line| (line.id.clone(), line.po_line_item_id.clone()))
            .collect();

        let mut matches = Vec::with_capacity(lines.len());
        for (line_id, po_line_item_id) in lines {
            let existing = self
                .three_way_matches
                .iter()
                .find(|record| record.invoice_line_item_id == line_id)
                .cloned();
            let record = match existing {
                Some(record) => record,
                None => self
                    .three_way_matches
                    .insert(ThreeWayMatch::auto(line_id, po_line_item_id, matched_at))?
                    .clone(),
            };
            matches.push(record);
        }

        Ok(matches)
    }

    pub fn match_for_invoice_line(
        &self,
        invoice_line_item_id: &str,
    ) -> ResultEngine<&ThreeWayMatch> {
        self.three_way_matches
            .iter()
            .find(|record| record.invoice_line_item_id == invoice_line_item_id)
            .ok_or_else(|| EngineError::KeyNotFound(invoice_line_item_id.to_string()))
    }

    /// Applies a manual approval to a match record.
    pub fn manual_approve(
        &mut self,
        match_id: &str,
        reviewer_id: &str,
        notes: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) -> ResultEngine<ThreeWayMatch> {
        Ok(self
            .three_way_matches
            .update(match_id, |record| {
                record.approve(reviewer_id, notes, reviewed_at);
            })?
            .clone())
    }

    /// Matches flagged for a human pass.
    ///
    /// The auto path never flags anything, so this only surfaces records
    /// edited through the generic update operation.
    pub fn matches_requiring_review(&self) -> Vec<&ThreeWayMatch> {
        self.three_way_matches
            .iter()
            .filter(|record| record.requires_review)
            .collect()
    }
}
