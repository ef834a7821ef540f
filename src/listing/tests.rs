use super::*;
use crate::core::ParserConfig;
use serde_json::json;

fn normalizer() -> ListingNormalizer {
    ListingNormalizer::new(&ParserConfig::default())
}

#[test]
fn test_range_salary_with_subway() {
    let record = normalizer().normalize(&json!({
        "header": " Уборщик ",
        "salary_min_rub": 7100,
        "salary_max_rub": 15000,
        "payment_type_alias": "range",
        "company": {"title": "МАОУ СОШ № 200"},
        "contact": {
            "address": "Екатеринбург, Ботанический район, Крестинского, 39",
            "subway": {"title": "Ботаническая"}
        },
        "description": "<p>Уборка  помещений</p>"
    }));

    assert_eq!(record.title, "Уборщик");
    assert_eq!(record.min_salary, Some(7100));
    assert_eq!(record.max_salary, Some(15000));
    assert_eq!(record.company_name, "МАОУ СОШ № 200");
    assert_eq!(
        record.address,
        "Екатеринбург, Ботанический район, Крестинского, 39, метро «Ботаническая»"
    );
    assert_eq!(record.description, "<p>Уборка  помещений</p>");
}

#[test]
fn test_fixed_payment_overwrites_max_salary() {
    for raw_max in [json!(0), json!(20000), json!(null)] {
        let record = normalizer().normalize(&json!({
            "salary_min_rub": 16200,
            "salary_max_rub": raw_max,
            "payment_type_alias": "fixed",
        }));

        assert_eq!(record.min_salary, Some(16200));
        assert_eq!(record.max_salary, record.min_salary);
    }
}

#[test]
fn test_zero_salary_is_absent() {
    let record = normalizer().normalize(&json!({
        "salary_min_rub": 17000,
        "salary_max_rub": 0,
        "payment_type_alias": "from",
    }));
    assert_eq!(record.min_salary, Some(17000));
    assert_eq!(record.max_salary, None);

    let record = normalizer().normalize(&json!({
        "salary_min_rub": 0,
        "salary_max_rub": 0,
        "payment_type_alias": "fixed",
    }));
    assert_eq!(record.min_salary, None);
    assert_eq!(record.max_salary, None);
}

#[test]
fn test_unreadable_salaries_are_absent() {
    let record = normalizer().normalize(&json!({
        "salary_min_rub": "12000",
        "salary_max_rub": "по договорённости",
    }));
    assert_eq!(record.min_salary, Some(12000));
    assert_eq!(record.max_salary, None);

    let record = normalizer().normalize(&json!({
        "salary_min_rub": -5,
        "salary_max_rub": 9999.9,
    }));
    assert_eq!(record.min_salary, None);
    assert_eq!(record.max_salary, Some(9999));

    let record = normalizer().normalize(&json!({
        "salary_min_rub": " 7100.5 ",
        "salary_max_rub": 7100.5,
    }));
    assert_eq!(record.min_salary, Some(7100));
    assert_eq!(record.max_salary, record.min_salary);

    let record = normalizer().normalize(&json!({
        "salary_min_rub": "NaN",
        "salary_max_rub": "-7100.5",
    }));
    assert_eq!(record.min_salary, None);
    assert_eq!(record.max_salary, None);
}

#[test]
fn test_missing_or_empty_subway_adds_no_suffix() {
    let listings = [
        json!({"contact": {"address": "Екатеринбург"}}),
        json!({"contact": {"address": "Екатеринбург", "subway": null}}),
        json!({"contact": {"address": "Екатеринбург", "subway": {}}}),
        json!({"contact": {"address": "Екатеринбург", "subway": {"title": ""}}}),
    ];
    for listing in &listings {
        assert_eq!(normalizer().normalize(listing).address, "Екатеринбург");
    }
}

#[test]
fn test_suffix_is_prettified_with_address() {
    let record = normalizer().normalize(&json!({
        "contact": {
            "address": "Екатеринбург, Заречный район, Черепанова ",
            "subway": {"title": "Уральская"}
        }
    }));

    assert_eq!(
        record.address,
        "Екатеринбург, Заречный район, Черепанова , метро «Уральская»"
    );
    assert_eq!(record.address.matches("метро").count(), 1);
}

#[test]
fn test_missing_nested_blocks_default_to_empty() {
    let record = normalizer().normalize(&json!({"header": "Дворник"}));

    assert_eq!(record.title, "Дворник");
    assert_eq!(record.company_name, "");
    assert_eq!(record.address, "");
    assert_eq!(record.description, "");
    assert_eq!(record.min_salary, None);
    assert_eq!(record.max_salary, None);

    let record = normalizer().normalize(&json!(null));
    assert_eq!(record, JobRecord::default());
}

#[test]
fn test_entities_are_unescaped_outside_description() {
    let record = normalizer().normalize(&json!({
        "header": "Уборщик в автоцентр &quot;Тойота Восток&quot;",
        "company": {"title": "ЗАО &quot;Комбинат &amp; К&quot;"},
        "description": "&quot;raw&quot;"
    }));

    assert_eq!(record.title, "Уборщик в автоцентр \"Тойота Восток\"");
    assert_eq!(record.company_name, "ЗАО \"Комбинат & К\"");
    assert_eq!(record.description, "&quot;raw&quot;");
}

#[test]
fn test_custom_metro_label() {
    let normalizer = ListingNormalizer::new(&ParserConfig::default().with_metro_label("metro"));
    let record = normalizer.normalize(&json!({
        "contact": {"address": "Yekaterinburg", "subway": {"title": "Uralskaya"}}
    }));

    assert_eq!(record.address, "Yekaterinburg, metro «Uralskaya»");
}

#[test]
fn test_equality_ignores_description() {
    let a = JobRecord {
        title: "Уборщик".to_string(),
        min_salary: Some(7100),
        description: "one".to_string(),
        ..JobRecord::default()
    };
    let b = JobRecord {
        description: "two".to_string(),
        ..a.clone()
    };
    let c = JobRecord {
        max_salary: Some(7100),
        ..a.clone()
    };

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_serialized_shape() {
    let record = JobRecord {
        title: "Уборщик снега".to_string(),
        min_salary: Some(17000),
        max_salary: None,
        company_name: "«Торговая Группа Альянс»".to_string(),
        address: "Екатеринбург".to_string(),
        description: "d".to_string(),
    };

    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({
            "title": "Уборщик снега",
            "minSalary": 17000,
            "companyName": "«Торговая Группа Альянс»",
            "address": "Екатеринбург",
            "description": "d"
        })
    );
    assert_eq!(record.to_string(), "Уборщик снега at «Торговая Группа Альянс» (from 17000)");
}
