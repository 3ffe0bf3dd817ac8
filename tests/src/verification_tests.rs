use ::verification::{api::Status, error::ContractError};
use platform::tests as platform_tests;
use sdk::{
    cosmwasm_std::Event,
    testing::{self, AppExt},
};

use crate::common::{
    credit_pool, verification, TestCase, BORROWER, DAY, LENDER, VERIFIER,
};

#[test]
fn verified_borrower_requests_loan() {
    let mut test_case = TestCase::new(1000, 0, 10);
    let pool = test_case.pool.clone();
    let oracle = test_case.verification.clone();
    let app = &mut test_case.app;

    verification::request_verification(app, &oracle, BORROWER, "sha256:5d41402a").unwrap();
    assert_eq!(None, verification::risk_note(app, &oracle, BORROWER));

    let resp = verification::verify(app, &oracle, VERIFIER, BORROWER, 35).unwrap();
    platform_tests::assert_event(
        &resp.events,
        &Event::new("wasm-verification-verify")
            .add_attribute("applicant", BORROWER)
            .add_attribute("risk-score", "35")
            .add_attribute("verifier", VERIFIER),
    );
    let verified_at = app.block_time();
    assert_eq!(
        &Status::Verified {
            risk_score: 35,
            verified_at,
            verifier: testing::user(VERIFIER),
        },
        verification::verification(app, &oracle, BORROWER)
            .unwrap()
            .status()
    );

    let risk_note = verification::risk_note(app, &oracle, BORROWER).unwrap();
    assert_eq!(
        format!("{}:35:{}", BORROWER, verified_at.seconds()),
        risk_note
    );

    credit_pool::stake(app, &pool, LENDER, 1000).unwrap();
    app.time_shift(8 * DAY);
    let request_id = credit_pool::request_loan(
        app,
        &pool,
        BORROWER,
        credit_pool::application(100, 10, &risk_note),
    )
    .unwrap();
    assert_eq!(
        risk_note,
        credit_pool::request(app, &pool, request_id)
            .unwrap()
            .risk_note()
    );
}

#[test]
fn verify_unauthorized() {
    let mut test_case = TestCase::new(1000, 0, 10);
    let oracle = test_case.verification.clone();
    let app = &mut test_case.app;

    verification::request_verification(app, &oracle, BORROWER, "sha256:5d41402a").unwrap();

    let err = verification::verify(app, &oracle, LENDER, BORROWER, 35).unwrap_err();
    assert_eq!(
        Some(&ContractError::NotVerifier),
        err.downcast_ref::<ContractError>()
    );
    assert_eq!(
        &Status::Pending,
        verification::verification(app, &oracle, BORROWER)
            .unwrap()
            .status()
    );
}

#[test]
fn verify_twice() {
    let mut test_case = TestCase::new(1000, 0, 10);
    let oracle = test_case.verification.clone();
    let app = &mut test_case.app;

    let err = verification::verify(app, &oracle, VERIFIER, BORROWER, 35).unwrap_err();
    assert_eq!(
        Some(&ContractError::NoRequest),
        err.downcast_ref::<ContractError>()
    );

    verification::request_verification(app, &oracle, BORROWER, "sha256:5d41402a").unwrap();
    let err = verification::request_verification(app, &oracle, BORROWER, "sha256:7d793037")
        .unwrap_err();
    assert_eq!(
        Some(&ContractError::AlreadyRequested),
        err.downcast_ref::<ContractError>()
    );

    verification::verify(app, &oracle, VERIFIER, BORROWER, 35).unwrap();
    let err = verification::verify(app, &oracle, VERIFIER, BORROWER, 10).unwrap_err();
    assert_eq!(
        Some(&ContractError::AlreadyVerified),
        err.downcast_ref::<ContractError>()
    );
}
