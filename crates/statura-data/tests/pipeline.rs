use statura_core::Metric;
use statura_data::{load_growth_data, seal, DataError};

const EXPORT: &str = "\
MRN,Name,DOB,Sex,Metric,Val,TS,Row,Misc\n\
1001,Doe,2020-01-01,M,Weight Measured,3.4,2020-01-15,1,\n\
1001,Doe,2020-01-01,M,Weight Measured,5.6,2020-03-15,2,\n\
1001,Doe,2020-01-01,M,Height/Length Measured,51.2,2020-01-15,3,\n\
1002,Roe,2020-03-10,F,Weight Measured,3.2,2020-03-20,4,\n\
1002,Roe,2020-03-10,F,Temperature,37.0,2020-03-20,5,\n\
1002,Roe,2020-03-10,F,Weight Measured,12.8,2022-06-01,6,\n";

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("statura-{}-{name}", std::process::id()))
}

#[test]
fn sealed_export_loads_end_to_end() {
    let sealed = seal(EXPORT.as_bytes(), Some("hunter2")).unwrap();
    let path = temp_path("sealed.enc");
    std::fs::write(&path, sealed).unwrap();

    let data = load_growth_data(&path, Some("hunter2")).unwrap();
    std::fs::remove_file(&path).unwrap();

    // Temperature is uncharted; the 2022 weight is past the 2-year
    // window. Everything else survives.
    assert_eq!(data.all.len(), 4);
    assert_eq!(data.weight.len(), 3);
    assert_eq!(data.height.len(), 1);
    assert!(data.head_circumference.is_empty());
    assert_eq!(data.mrns, vec!["1001".to_string(), "1002".to_string()]);
    assert!(data.all.iter().all(|m| m.age_months < 24.5));
    assert!(data
        .weight
        .iter()
        .all(|m| m.metric == Metric::Weight));
}

#[test]
fn passwordless_container_loads_end_to_end() {
    let sealed = seal(EXPORT.as_bytes(), None).unwrap();
    let path = temp_path("plain.enc");
    std::fs::write(&path, sealed).unwrap();

    let data = load_growth_data(&path, None).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(data.all.len(), 4);
}

#[test]
fn wrong_password_surfaces_a_decrypt_error() {
    let sealed = seal(EXPORT.as_bytes(), Some("hunter2")).unwrap();
    let path = temp_path("wrongpwd.enc");
    std::fs::write(&path, sealed).unwrap();

    let err = load_growth_data(&path, Some("password1"));
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, Err(DataError::Decrypt)));
}

#[test]
fn missing_file_surfaces_an_io_error() {
    assert!(matches!(
        load_growth_data("/nonexistent/export.enc", None),
        Err(DataError::Io(_))
    ));
}
