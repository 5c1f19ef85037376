use policy_rate_board::domain::errors::{AppError, DataError, InvalidRecord};
use policy_rate_board::domain::rates::{RateRecord, RateRepository};
use policy_rate_board::infrastructure::data_source::{
    EMBEDDED_RATES, load_rates_document, parse_rates_document, validate_records,
};
use policy_rate_board::infrastructure::{EmbeddedRateRepository, StaticRateRepository};

const DATA_JS: &str = r#"// 세계 각국의 기준금리 데이터 (최신 업데이트)
// 출처: 각국 중앙은행 공식 발표
// 자동 업데이트: python fetch_rates.py 실행

const baseRates = [
    {
        "country": "미국",
        "flag": "🇺🇸",
        "rate": 5.25,
        "date": "2024-12-18",
        "change": 0.0,
        "currency": "USD"
    },
    {
        "country": "유로존",
        "flag": "🇪🇺",
        "rate": 4.25,
        "date": "2024-12-12",
        "change": -0.25,
        "currency": "EUR",
        "source": "ECB API"
    }
];
"#;

#[test]
fn embedded_dataset_loads() {
    let records = EmbeddedRateRepository.load_rates().unwrap();
    assert_eq!(records.len(), 20);
    assert_eq!(records[0].country, "미국");
    assert_eq!(records[0].currency, "USD");
    assert!(records.iter().all(|r| !r.flag.is_empty()));
}

#[test]
fn embedded_dataset_parses_as_json_array() {
    assert!(EMBEDDED_RATES.trim_start().starts_with('['));
    assert_eq!(parse_rates_document(EMBEDDED_RATES).unwrap().len(), 20);
}

#[test]
fn script_form_is_accepted() {
    let records = parse_rates_document(DATA_JS).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].change.value(), -0.25);
    assert_eq!(records[1].source.as_deref(), Some("ECB API"));
}

#[test]
fn unknown_binding_is_rejected() {
    let err = parse_rates_document("const otherRates = [];").unwrap_err();
    assert!(matches!(err, DataError::Parse(_)));
}

#[test]
fn garbage_is_a_parse_error() {
    let err = parse_rates_document("not json at all").unwrap_err();
    assert!(matches!(err, DataError::Parse(_)));
    assert!(err.to_string().starts_with("cannot parse rates document"));
}

#[test]
fn missing_field_is_a_parse_error() {
    let err = parse_rates_document(r#"[{"country":"USA","flag":"US","date":"2024","change":0}]"#).unwrap_err();
    assert!(matches!(err, DataError::Parse(_)));
}

#[test]
fn invalid_record_is_reported_by_index() {
    let records = vec![
        RateRecord::new("USA", "US", 5.5, "2024-01", 0.0),
        RateRecord::new("", "JP", 0.1, "2024-01", 0.0),
    ];
    assert_eq!(
        validate_records(&records),
        Err(DataError::Invalid { index: 1, reason: InvalidRecord::EmptyCountry })
    );
}

#[test]
fn non_finite_values_are_rejected() {
    let nan_rate = vec![RateRecord::new("X", "X", f64::NAN, "2024", 0.0)];
    assert!(matches!(
        validate_records(&nan_rate),
        Err(DataError::Invalid { index: 0, reason: InvalidRecord::NonFiniteRate(_) })
    ));

    let inf_change = vec![RateRecord::new("X", "X", 1.0, "2024", f64::INFINITY)];
    assert!(matches!(
        validate_records(&inf_change),
        Err(DataError::Invalid { index: 0, reason: InvalidRecord::NonFiniteChange(_) })
    ));
}

#[test]
fn empty_flag_fails_load() {
    let err = load_rates_document(r#"[{"country":"USA","flag":"","rate":1,"date":"2024","change":0}]"#)
        .unwrap_err();
    assert_eq!(err, DataError::Invalid { index: 0, reason: InvalidRecord::EmptyFlag });
    assert_eq!(err.to_string(), "record #0 is invalid: flag is empty");
}

#[test]
fn static_repository_validates_on_load() {
    let repository = StaticRateRepository::new(vec![RateRecord::new("USA", "", 5.5, "2024", 0.0)]);
    let err = repository.load_rates().unwrap_err();
    assert!(matches!(err, AppError::Data(DataError::Invalid { index: 0, .. })));
}

#[test]
fn static_repository_from_document() {
    let repository = StaticRateRepository::from_document(DATA_JS).unwrap();
    assert_eq!(repository.load_rates().unwrap().len(), 2);
}
