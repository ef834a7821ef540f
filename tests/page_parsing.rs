use vacancy_parser::{JobRecord, PageParser, Parser};

const SEARCH_PAGE: &str = include_str!("fixtures/search_page.html");

fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .filter_module("html5ever", log::LevelFilter::Error)
        .filter_module("selectors", log::LevelFilter::Warn)
        .try_init();
}

fn job(
    title: &str,
    company_name: &str,
    min_salary: Option<u64>,
    max_salary: Option<u64>,
    address: &str,
) -> JobRecord {
    JobRecord {
        title: title.to_string(),
        min_salary,
        max_salary,
        company_name: company_name.to_string(),
        address: address.to_string(),
        description: String::new(),
    }
}

#[test]
fn test_parsing_single_page() {
    init_logging();
    let parser = PageParser::new().unwrap();
    let result = parser.parse(SEARCH_PAGE).unwrap();

    assert_eq!(result.pages().len(), 1, "should be 1 page to move forward");
    assert_eq!(
        result.pages()[0],
        "http://ekb.zarplata.ru/vacancy?state%5B%5D=1&state%5B%5D=4&average_salary=1&categories_facets=1&city_id%5B%5D=994&highlight=1&q=%D0%A3%D0%B1%D0%BE%D1%80%D1%89%D0%B8%D0%BA&searched_q=%D0%A3%D0%B1%D0%BE%D1%80%D1%89%D0%B8%D0%BA&limit=10&offset=10"
    );

    let expected = [
        job(
            "Уборщик",
            "МАОУ СОШ № 200",
            Some(7100),
            Some(15000),
            "Екатеринбург, Ботанический район, Крестинского, 39, метро «Ботаническая»",
        ),
        job(
            "Уборщик помещений",
            "Уральский техникум \"Рифей\"",
            Some(7100),
            Some(7100),
            "Екатеринбург, Уктус район, Корейский пер., 6, метро «Ботаническая»",
        ),
        job(
            "Уборщик снега",
            "«Торговая Группа Альянс»",
            Some(17000),
            None,
            "Екатеринбург, Пионерский район, Шоферов, 7",
        ),
        job(
            "Уборщик помещений в автоцентр \"Тойота Восток\"",
            "Тойота Центр Екатеринбург Восток",
            Some(16200),
            Some(16200),
            "Екатеринбург, Сибирский тракт, 24б",
        ),
        job(
            "Уборщик",
            "ООО \"СервисТрансКлининг-Урал\"",
            Some(7000),
            Some(8000),
            "Екатеринбург, Заречный район, Черепанова , метро «Уральская»",
        ),
        job(
            "Уборщик производственных помещений",
            "ЗАО \"Комбинат пищевой \"Хороший вкус\"",
            Some(15000),
            None,
            "Екатеринбург",
        ),
        job(
            "Уборщик территории 2 разряда",
            "Государственное автономное учреждение Свердловской области \"Уральская футбольная академия\"",
            Some(16000),
            None,
            "Екатеринбург, Уралмаш район, Фестивальная, 10, Вход со стороны ДК \"Уралмаш\", метро «Уралмаш»",
        ),
        job(
            "Уборщик территории",
            "ООО \"Мечел-Сервис\" (Екатеринбургский филиал)",
            Some(10000),
            None,
            "Екатеринбург, Пионерский район, Учителей, 37, метро «Машиностроителей»",
        ),
        job(
            "Уборщица, уборщик",
            "Ирландский паб в Карасьеозёрский-2",
            Some(15000),
            None,
            "Екатеринбург, ВИЗ район, Малогородская, 4, метро «Геологическая»",
        ),
        job(
            "Уборщик территории",
            "УИ(ф)РАНХиГС",
            Some(6000),
            None,
            "Екатеринбург, 8Марта, метро «Геологическая»",
        ),
    ];

    let jobs = result.jobs();
    assert_eq!(jobs.len(), 10, "should be 10 jobs");
    for (i, (actual, expected)) in jobs.iter().zip(expected.iter()).enumerate() {
        assert_eq!(actual, expected, "jobs[{}]", i);
    }
}

#[test]
fn test_descriptions_pass_through_raw() {
    let result = PageParser::new().unwrap().parse_page(SEARCH_PAGE).unwrap();

    assert_eq!(result.jobs()[0].description, "<p>Уборка помещений школы.</p>");
    assert_eq!(
        result.jobs()[2].description,
        "<ul><li>Уборка снега с кровли</li></ul>"
    );
}

#[test]
fn test_fixed_payment_listings_have_equal_bounds() {
    let result = PageParser::new().unwrap().parse_page(SEARCH_PAGE).unwrap();

    for job in result.jobs() {
        assert_ne!(job.min_salary, Some(0));
        assert_ne!(job.max_salary, Some(0));
    }
    for i in [1, 3] {
        let job = &result.jobs()[i];
        assert!(job.min_salary.is_some(), "jobs[{}]", i);
        assert_eq!(job.min_salary, job.max_salary, "jobs[{}]", i);
    }
}

#[test]
fn test_parser_is_shareable_across_threads() {
    let parser = std::sync::Arc::new(PageParser::new().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let parser = std::sync::Arc::clone(&parser);
            std::thread::spawn(move || parser.parse_page(SEARCH_PAGE).unwrap().jobs().len())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 10);
    }
}

#[test]
fn test_serialized_page_result() {
    let result = PageParser::new().unwrap().parse_page(SEARCH_PAGE).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["jobs"][2]["minSalary"], 17000);
    assert!(value["jobs"][2].get("maxSalary").is_none());
    assert_eq!(value["jobs"][0]["companyName"], "МАОУ СОШ № 200");
    assert_eq!(value["pages"].as_array().map(Vec::len), Some(1));
}
