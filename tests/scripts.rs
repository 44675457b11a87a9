mod common;

use std::fs;

use common::run_captured;
use walkdir::WalkDir;

#[test]
fn script_outputs_match() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "funk"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                              panic!("Failed to read {expected_path:?}: {e}")
                                                          });

        count += 1;
        let (result, output) = run_captured(&[source.as_str()]);
        if let Err(e) = result {
            panic!("Script {path:?} failed:\n{source}\nError: {e}");
        }
        assert_eq!(output, expected, "output of {path:?} differs");
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
