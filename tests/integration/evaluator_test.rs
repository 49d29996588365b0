use comfort_monitor::{evaluate, Classification, Parameter, Reading, SensorOutcome, Severity, Thresholds};

fn classify(reading: Reading) -> Classification {
    evaluate(&SensorOutcome::Reading(reading), &Thresholds::default())
}

#[test]
fn test_comfortable_room() {
    let classification = classify(Reading::new(22.0, 50.0, 55.0));
    assert_eq!(
        classification,
        Classification {
            status_text: "excellent for study/focus".to_string(),
            severity: Severity::Ok,
            out_of_range: vec![],
        }
    );
}

#[test]
fn test_too_warm_room() {
    let classification = classify(Reading::new(28.0, 50.0, 55.0));
    assert_eq!(classification.severity, Severity::Warning);
    assert_eq!(classification.status_text, "attention: 1 parameter out of ideal range");
    assert_eq!(classification.out_of_range, vec![Parameter::Temperature]);
}

#[test]
fn test_everything_wrong() {
    let classification = classify(Reading::new(28.0, 70.0, 10.0));
    assert_eq!(classification.severity, Severity::Critical);
    assert_eq!(
        classification.status_text,
        "poor for study/focus: multiple critical parameters"
    );
    assert_eq!(
        classification.out_of_range,
        vec![Parameter::Temperature, Parameter::Humidity, Parameter::Luminosity]
    );
}

#[test]
fn test_severity_matches_out_of_range_count() {
    let temperatures = [15.0, 20.0, 23.0, 26.0, 31.0];
    let humidities = [35.0, 40.0, 50.0, 60.0, 65.0];
    let luminosities = [5.0, 30.0, 50.0, 80.0, 95.0];
    let thresholds = Thresholds::default();

    for &t in &temperatures {
        for &h in &humidities {
            for &l in &luminosities {
                let reading = Reading::new(t, h, l);
                let classification = classify(reading);

                let expected: Vec<Parameter> = Parameter::ALL
                    .into_iter()
                    .filter(|&p| {
                        let range = thresholds.range(p);
                        let v = reading.value(p);
                        v < range.min || v > range.max
                    })
                    .collect();
                assert_eq!(classification.out_of_range, expected);

                let severity = match expected.len() {
                    0 => Severity::Ok,
                    1 => Severity::Warning,
                    _ => Severity::Critical,
                };
                assert_eq!(classification.severity, severity, "reading {:?}", reading);
            }
        }
    }
}

#[test]
fn test_unavailable_never_lists_parameters() {
    let classification = evaluate(&SensorOutcome::Unavailable, &Thresholds::default());
    assert_eq!(classification.severity, Severity::Unavailable);
    assert_eq!(classification.status_text, "device not found");
    assert!(classification.out_of_range.is_empty());
}

#[test]
fn test_classification_json_shape() {
    let classification = classify(Reading::new(28.0, 50.0, 55.0));
    let json = serde_json::to_value(&classification).unwrap();
    assert_eq!(json["severity"], "WARNING");
    assert_eq!(json["out_of_range"], serde_json::json!(["temperature"]));
}
