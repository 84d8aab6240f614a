//! Three-way match API endpoints

use api_types::three_way_match::{ManualApproveParams, MatchResult, MatchUpdate, MatchView};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;

use crate::{ServerError, server::ServerState};

fn map_result(result: engine::MatchResult) -> MatchResult {
    match result {
        engine::MatchResult::Matched => MatchResult::Matched,
        engine::MatchResult::ManuallyApproved => MatchResult::ManuallyApproved,
    }
}

fn view(record: &engine::ThreeWayMatch) -> MatchView {
    MatchView {
        id: record.id.clone(),
        invoice_line_item_id: record.invoice_line_item_id.clone(),
        po_line_item_id: record.po_line_item_id.clone(),
        grn_line_item_id: record.grn_line_item_id.clone(),
        match_result: map_result(record.match_result),
        requires_review: record.requires_review,
        auto_approved: record.auto_approved,
        manually_reviewed: record.manually_reviewed,
        quantity_tolerance_percentage: record.quantity_tolerance_percentage,
        price_tolerance_percentage: record.price_tolerance_percentage,
        match_successful: record.match_successful,
        matched_at: record.matched_at,
        reviewed_by: record.reviewed_by.clone(),
        reviewed_at: record.reviewed_at,
        match_notes: record.match_notes.clone(),
    }
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<MatchView>>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(engine.three_way_matches().iter().map(view).collect()))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<MatchView>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(view(engine.three_way_match(&id)?)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MatchUpdate>,
) -> Result<Json<MatchView>, ServerError> {
    let patch = engine::ThreeWayMatchPatch {
        requires_review: payload.requires_review,
        match_successful: payload.match_successful,
        match_notes: payload.match_notes,
    };

    let mut engine = state.engine.write().await;
    let updated = engine.update_three_way_match(&id, patch)?;
    Ok(Json(view(&updated)))
}

pub async fn run_for_invoice(
    State(state): State<ServerState>,
    Path(invoice_id): Path<String>,
) -> Result<Json<Vec<MatchView>>, ServerError> {
    let mut engine = state.engine.write().await;
    let matches = engine.run_matches_for_invoice(&invoice_id, Utc::now())?;
    Ok(Json(matches.iter().map(view).collect()))
}

pub async fn for_invoice_line(
    State(state): State<ServerState>,
    Path(invoice_line_item_id): Path<String>,
) -> Result<Json<MatchView>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(view(
        engine.match_for_invoice_line(&invoice_line_item_id)?,
    )))
}

pub async fn requiring_review(
    State(state): State<ServerState>,
) -> Result<Json<Vec<MatchView>>, ServerError> {
    let engine = state.engine.read().await;
    Ok(Json(
        engine
            .matches_requiring_review()
            .into_iter()
            .map(view)
            .collect(),
    ))
}

pub async fn manual_approve(
    State(state): State<ServerState>,
    Path(match_id): Path<String>,
    Query(params): Query<ManualApproveParams>,
) -> Result<Json<MatchView>, ServerError> {
    let Some(reviewer_id) = params.reviewer_id.filter(|id| !id.trim().is_empty()) else {
        return Err(ServerError::Generic("reviewer_id is required".to_string()));
    };

    let mut engine = state.engine.write().await;
    let approved = engine.manual_approve(&match_id, &reviewer_id, params.notes, Utc::now())?;
    Ok(Json(view(&approved)))
}
