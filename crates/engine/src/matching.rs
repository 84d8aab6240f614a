//! Three-way match records.
//!
//! A match ties one invoice line to its purchase order and goods-received
//! counterparts. At most one record exists per invoice line; creation is
//! lookup-before-create, so re-running the match for an invoice never
//! duplicates or rewrites anything.
//!
//! Creation always produces an auto-approved `MATCHED` record. The tolerance
//! percentages are carried as data only; nothing compares the invoice against
//! PO or GRN figures yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{EngineError, store::Record};

/// Default quantity tolerance stamped on new match records.
pub const QUANTITY_TOLERANCE_PERCENTAGE: f64 = 5.0;
/// Default price tolerance stamped on new match records.
pub const PRICE_TOLERANCE_PERCENTAGE: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchResult {
    Matched,
    ManuallyApproved,
}

impl MatchResult {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Matched => "MATCHED",
            Self::ManuallyApproved => "MANUALLY_APPROVED",
        }
    }
}

impl TryFrom<&str> for MatchResult {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "MATCHED" => Ok(Self::Matched),
            "MANUALLY_APPROVED" => Ok(Self::ManuallyApproved),
            other => Err(EngineError::InvalidInput(format!(
                "invalid match result: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreeWayMatch {
    #[serde(default)]
    pub id: String,
    pub invoice_line_item_id: String,
    #[serde(default)]
    pub po_line_item_id: Option<String>,
    #[serde(default)]
    pub grn_line_item_id: Option<String>,
    pub match_result: MatchResult,
    #[serde(default)]
    pub requires_review: bool,
    #[serde(default)]
    pub auto_approved: bool,
    #[serde(default)]
    pub manually_reviewed: bool,
    pub quantity_tolerance_percentage: f64,
    pub price_tolerance_percentage: f64,
    pub match_successful: bool,
    pub matched_at: DateTime<Utc>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub match_notes: Option<String>,
}

impl ThreeWayMatch {
    /// Auto-match record for one invoice line.
    pub fn auto(
        invoice_line_item_id: String,
        po_line_item_id: Option<String>,
        matched_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: String::new(),
            invoice_line_item_id,
            po_line_item_id,
            grn_line_item_id: None,
            match_result: MatchResult::Matched,
            requires_review: false,
            auto_approved: true,
            manually_reviewed: false,
            quantity_tolerance_percentage: QUANTITY_TOLERANCE_PERCENTAGE,
            price_tolerance_percentage: PRICE_TOLERANCE_PERCENTAGE,
            match_successful: true,
            matched_at,
            reviewed_by: None,
            reviewed_at: None,
            match_notes: None,
        }
    }

    /// Marks the record as reviewed and approved by a person.
    ///
    /// Terminal: there is no way back to the auto-matched state. Approving a
    /// second time overwrites the reviewer, timestamp and notes.
    pub fn approve(
        &mut self,
        reviewer_id: &str,
        notes: Option<String>,
        reviewed_at: DateTime<Utc>,
    ) {
        self.match_result = MatchResult::ManuallyApproved;
        self.manually_reviewed = true;
        self.reviewed_by = Some(reviewer_id.to_string());
        self.reviewed_at = Some(reviewed_at);
        self.match_notes = notes;
    }
}

impl Record for ThreeWayMatch {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Clone, Debug, Default)]
pub struct ThreeWayMatchPatch {
    pub requires_review: Option<bool>,
    pub match_successful: Option<bool>,
    pub match_notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn auto_match_starts_matched_and_reviewless() {
        let matched_at = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let record = ThreeWayMatch::auto("li1".to_string(), Some("po-li1".to_string()), matched_at);

        assert_eq!(record.match_result, MatchResult::Matched);
        assert!(!record.requires_review);
        assert!(record.auto_approved);
        assert!(!record.manually_reviewed);
        assert!(record.match_successful);
        assert_eq!(record.quantity_tolerance_percentage, 5.0);
        assert_eq!(record.price_tolerance_percentage, 5.0);
    }

    #[test]
    fn approve_is_terminal_and_records_the_reviewer() {
        let matched_at = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let reviewed_at = Utc.with_ymd_and_hms(2026, 2, 2, 9, 0, 0).unwrap();
        let mut record = ThreeWayMatch::auto("li1".to_string(), None, matched_at);

        record.approve("rev-1", Some("checked by hand".to_string()), reviewed_at);

        assert_eq!(record.match_result, MatchResult::ManuallyApproved);
        assert!(record.manually_reviewed);
        assert_eq!(record.reviewed_by.as_deref(), Some("rev-1"));
        assert_eq!(record.reviewed_at, Some(reviewed_at));
        assert_eq!(record.match_notes.as_deref(), Some("checked by hand"));
    }

    #[test]
    fn reapproval_overwrites_reviewer_and_notes() {
        let matched_at = Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        let mut record = ThreeWayMatch::auto("li1".to_string(), None, matched_at);

        record.approve("rev-1", Some("first pass".to_string()), matched_at);
        record.approve("rev-2", None, matched_at);

        assert_eq!(record.match_result, MatchResult::ManuallyApproved);
        assert_eq!(record.reviewed_by.as_deref(), Some("rev-2"));
        assert_eq!(record.match_notes, None);
    }
}
