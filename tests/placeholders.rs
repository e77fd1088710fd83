use contract_dsl::{
    ContractValue, DslValues, ExampleGenerator, GeneratorConfig, Pattern, Placeholder,
    RegexExampleGenerator, RequestBuilder,
};

const SAMPLES: usize = 1000;

#[test]
fn every_placeholder_example_matches_its_pattern() {
    for (index, placeholder) in Placeholder::ALL.into_iter().enumerate() {
        let pattern = Pattern::placeholder(placeholder).unwrap();
        let mut generator = RegexExampleGenerator::seeded(1_000 + index as u64);
        for _ in 0..SAMPLES {
            let example = generator.generate(&pattern).unwrap();
            assert!(
                pattern.matches(&example),
                "{placeholder}: '{example}' does not match {pattern}"
            );
        }
    }
}

#[test]
fn placeholder_helpers_are_pattern_backed() {
    let mut builder = RequestBuilder::with_config(GeneratorConfig::seeded(3));
    let properties = [
        builder.any_alpha_unicode().unwrap(),
        builder.any_alpha_numeric().unwrap(),
        builder.any_number().unwrap(),
        builder.any_integer().unwrap(),
        builder.any_positive_int().unwrap(),
        builder.any_double().unwrap(),
        builder.any_hex().unwrap(),
        builder.a_boolean().unwrap(),
        builder.any_ip_address().unwrap(),
        builder.any_hostname().unwrap(),
        builder.any_email().unwrap(),
        builder.any_url().unwrap(),
        builder.any_https_url().unwrap(),
        builder.any_uuid().unwrap(),
        builder.any_date().unwrap(),
        builder.any_date_time().unwrap(),
        builder.any_time().unwrap(),
        builder.any_iso8601_with_offset().unwrap(),
        builder.any_non_blank_string().unwrap(),
        builder.any_non_empty_string().unwrap(),
    ];

    for (property, placeholder) in properties.iter().zip(Placeholder::ALL) {
        assert!(property.is_pattern_backed(), "{placeholder}");
        let ContractValue::Text(example) = property.client_value() else {
            panic!("{placeholder}: client side is not text");
        };
        let pattern = property.server_value().as_pattern().unwrap();
        assert_eq!(pattern.as_str(), placeholder.regex());
        assert!(pattern.matches(example), "{placeholder}: '{example}'");
    }
}

#[test]
fn any_of_picks_one_of_the_values() {
    let mut builder = RequestBuilder::with_config(GeneratorConfig::seeded(5));
    let values = ["GET", "POST", "a.b"];
    for _ in 0..SAMPLES {
        let property = builder.any_of(values).unwrap();
        let ContractValue::Text(example) = property.client_value() else {
            panic!("client side is not text");
        };
        assert!(values.contains(&example.as_str()), "{example}");
    }
}

#[test]
fn unseeded_generators_still_satisfy_patterns() {
    let mut generator = RegexExampleGenerator::default();
    for placeholder in Placeholder::ALL {
        let pattern = Pattern::placeholder(placeholder).unwrap();
        let example = generator.generate(&pattern).unwrap();
        assert!(pattern.matches(&example), "{placeholder}: '{example}'");
    }
}
