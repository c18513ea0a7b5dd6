// Unit tests for error mapping - pure domain logic without HTTP server dependencies
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_missing_selection_to_422() {
    let de = DomainError::validation(ValidationKind::MissingSelection, "pick a bowler");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::SelectionRequired);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_other_validation_to_generic_code() {
    let de = DomainError::validation_other("odd input");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.to_string(), "Validation error: odd input");
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Scorecard, "no scorecard");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "SCORECARD_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let row = DomainError::not_found(NotFoundKind::LedgerRow, "no row");
    let app: AppError = row.into();
    assert_eq!(app.code(), ErrorCode::RowNotFound);
}

#[test]
fn maps_infra() {
    let down = DomainError::infra(InfraErrorKind::StoreUnavailable, "disk gone");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "STORE_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corr = DomainError::infra(InfraErrorKind::DataCorruption, "bad json");
    let app: AppError = corr.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("x".into()), "other");
    let app: AppError = other.into();
    assert_eq!(app.code(), ErrorCode::Internal);
}

#[test]
fn detail_strips_kind_prefix() {
    let de = DomainError::validation(ValidationKind::DuplicateBatter, "already at the other end");
    assert_eq!(de.detail(), "already at the other end");
    assert!(de.to_string().starts_with("validation DuplicateBatter"));
}
