use oddjob::error::CommandFailedDetails;
use oddjob::output::{exit_code_for_error, map_cmd_result_to_json, CliResponse};
use oddjob::{Error, ErrorCode};

#[test]
fn command_failed_serializes_stdout_stderr() {
    let err = Error::command_failed(CommandFailedDetails {
        command: "ls -la".to_string(),
        exit_code: 127,
        stdout: "some stdout".to_string(),
        stderr: "some stderr".to_string(),
    });

    let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

    assert!(json.contains("\"code\": \"command.failed\""));
    assert!(json.contains("some stdout"));
    assert!(json.contains("some stderr"));
    assert!(json.contains("\"exitCode\": 127"));
}

#[test]
fn command_failed_maps_to_exit_code_20() {
    let err = Error::command_failed(CommandFailedDetails {
        command: "ls".to_string(),
        exit_code: 1,
        stdout: String::new(),
        stderr: String::new(),
    });

    let (_value, exit_code) = map_cmd_result_to_json::<serde_json::Value>(Err(err));

    assert_eq!(exit_code, 20);
}

#[test]
fn validation_errors_map_to_exit_code_2() {
    assert_eq!(exit_code_for_error(ErrorCode::ValidationMissingValue), 2);
    assert_eq!(exit_code_for_error(ErrorCode::ValidationEmptyCollection), 2);
    assert_eq!(exit_code_for_error(ErrorCode::ValidationInvalidArgument), 2);
}

#[test]
fn internal_errors_map_to_exit_code_1() {
    assert_eq!(exit_code_for_error(ErrorCode::InternalIoError), 1);
    assert_eq!(exit_code_for_error(ErrorCode::InternalDecodeError), 1);
}

#[test]
fn empty_collection_error_serializes_container_kind() {
    let err = Error::validation_empty_collection("targets", "slice", "Nothing to process");

    let json = CliResponse::<()>::from_error(&err).to_json().unwrap();

    assert!(json.contains("\"code\": \"validation.empty_collection\""));
    assert!(json.contains("\"kind\": \"slice\""));
}

#[test]
fn hints_are_omitted_when_absent_and_present_when_attached() {
    let plain = Error::validation_missing_value("path", "Missing path");
    let json = CliResponse::<()>::from_error(&plain).to_json().unwrap();
    assert!(!json.contains("\"hints\""));

    let hinted = plain.with_hint("Pass a file path as the first argument");
    let json = CliResponse::<()>::from_error(&hinted).to_json().unwrap();
    assert!(json.contains("Pass a file path as the first argument"));
}

#[test]
fn success_envelope_wraps_data() {
    let response = CliResponse::success(serde_json::json!({ "found": true }));
    let json = response.to_json().unwrap();

    assert!(json.contains("\"success\": true"));
    assert!(json.contains("\"found\": true"));
}
