use fileinfo::{ResultModel, ReturnCode, Severity};

#[test]
fn unknown_format_then_ok_stays_fatal() {
    let mut model = ResultModel::new();
    model.set_status(ReturnCode::UnknownFormat);
    model.set_status(ReturnCode::Ok);
    assert_eq!(model.status(), ReturnCode::UnknownFormat);
    assert_eq!(model.status().message(), ReturnCode::UnknownFormat.message());
}

#[test]
fn fatal_status_survives_every_non_fatal_write() {
    let non_fatal = [
        ReturnCode::Ok,
        ReturnCode::UnknownCompiler,
        ReturnCode::EntryPointDetection,
        ReturnCode::FormatParserProblem,
        ReturnCode::MachoArDetection,
        ReturnCode::ArchiveDetection,
    ];
    for code in non_fatal {
        let mut model = ResultModel::new();
        model.set_status(ReturnCode::FileProblem);
        assert!(!model.set_status(code), "{:?} must not replace a fatal status", code);
        assert_eq!(model.status_severity(), Severity::Fatal);
    }
}

#[test]
fn status_escalates() {
    let mut model = ResultModel::new();
    model.set_status(ReturnCode::UnknownCompiler);
    assert_eq!(model.status_severity(), Severity::Warning);
    model.set_status(ReturnCode::FormatParserProblem);
    assert_eq!(model.status_severity(), Severity::Error);
    model.set_status(ReturnCode::FileNotExist);
    assert_eq!(model.status(), ReturnCode::FileNotExist);
}

#[test]
fn failure_channels_are_separate() {
    let mut model = ResultModel::new();
    model.add_message("import parser: truncated thunk array");
    model.add_message("resource parser: loop in directory tree");
    model.set_deps_list_failed_to_load("win-deps.txt");

    assert_eq!(model.number_of_messages(), 2);
    assert_eq!(model.messages()[0], "import parser: truncated thunk array");
    assert_eq!(model.deps_list_failed_to_load(), "win-deps.txt");
    assert_eq!(model.status(), ReturnCode::Ok);
}

#[test]
fn failed_analyzer_leaves_its_record_default() {
    let mut model = crate::common::populated_model();
    // resource analyzer failed: nothing was written to the resource table
    model.add_message("resource parser failed");
    model.set_status(ReturnCode::FormatParserProblem);

    assert!(!model.resources.has_records());
    assert_eq!(model.resources.number_of_version_strings(), 0);
    assert!(model.imports.has_records());
    assert_eq!(model.number_of_sections(), 2);
}
