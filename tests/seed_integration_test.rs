use anyhow::Result;
use buying_frenzy::core::ConfigProvider;
use buying_frenzy::domain::model::RestaurantSnapshot;
use buying_frenzy::{FrenzyError, LocalStorage, SeedEngine, SeedPipeline, Weekday};
use chrono::NaiveDate;
use httpmock::prelude::*;
use tempfile::TempDir;

struct TestConfig {
    source: String,
    output_path: String,
    skip_invalid_hours: bool,
}

impl ConfigProvider for TestConfig {
    fn source(&self) -> &str {
        &self.source
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn skip_invalid_hours(&self) -> bool {
        self.skip_invalid_hours
    }
}

fn restaurants() -> serde_json::Value {
    serde_json::json!([
        {
            "cashBalance": 1320.19,
            "menu": [
                {"dishName": "Chicken Bouillon with Rice (10 min.)", "price": 13.95},
                {"dishName": "Frogs' legs in every style", "price": 11.95},
                {"dishName": "Komarinon", "price": 12.81}
            ],
            "openingHours": "Mon, Weds 3:45 pm - 5 pm / Tues 11:30 am - 3 am / Thurs 10 am - 11:30 pm / Fri 7 am - 9:45 am / Sat 12:45 pm - 1:15 pm / Sun 2 pm - 7 pm",
            "restaurantName": "100% Mexicano Restaurant"
        },
        {
            "cashBalance": 4483.84,
            "menu": [{"dishName": "Olives", "price": 13.18}],
            "openingHours": "Mon - Weds 5 pm - 12:30 am / Thurs - Sun 9 am - 5 pm",
            "restaurantName": "Roma Ristorante"
        }
    ])
}

#[tokio::test]
async fn test_end_to_end_seed_over_http() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/restaurants.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(restaurants());
    });

    let config = TestConfig {
        source: server.url("/restaurants.json"),
        output_path: output_path.clone(),
        skip_invalid_hours: false,
    };
    let storage = LocalStorage::new(output_path.clone());
    let engine = SeedEngine::new(SeedPipeline::new(storage, config));

    let report = engine.run().await?;
    api_mock.assert();

    assert_eq!(report.rejected, 0);
    assert_eq!(report.store.restaurants().len(), 2);
    assert_eq!(report.store.restaurants()[0].dishes.len(), 3);
    assert_eq!(report.store.weekly_schedule(1).len(), 7);
    assert_eq!(report.store.schedule_count(), 14);
    assert!(report.store.schedule_for(1, Weekday::Tuesday).unwrap().overnight());

    // Tuesday 2022-02-15 at 23:00
    let at = NaiveDate::from_ymd_opt(2022, 2, 15)
        .unwrap()
        .and_hms_opt(23, 0, 0)
        .unwrap();
    let open: Vec<&str> = report
        .store
        .query_open_at(at)
        .into_iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(open, vec!["100% Mexicano Restaurant", "Roma Ristorante"]);

    let snapshot_path = temp_dir.path().join("schedules.json");
    assert!(snapshot_path.exists());
    assert!(report.output_path.ends_with("schedules.json"));

    let snapshot: Vec<RestaurantSnapshot> = serde_json::from_slice(&std::fs::read(snapshot_path)?)?;
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot[1].name, "Roma Ristorante");
    assert_eq!(snapshot[1].dishes, 1);
    assert_eq!(snapshot[1].schedule, report.store.weekly_schedule(2));

    Ok(())
}

#[tokio::test]
async fn test_seed_from_local_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let feed_path = temp_dir.path().join("restaurants.json");
    std::fs::write(&feed_path, serde_json::to_vec(&restaurants())?)?;
    let output_path = temp_dir.path().join("out").to_str().unwrap().to_string();

    let config = TestConfig {
        source: feed_path.to_str().unwrap().to_string(),
        output_path: output_path.clone(),
        skip_invalid_hours: false,
    };
    let engine = SeedEngine::new(SeedPipeline::new(LocalStorage::new(output_path), config));

    let report = engine.run().await?;
    assert_eq!(report.store.restaurants().len(), 2);
    assert!(temp_dir.path().join("out").join("schedules.json").exists());

    Ok(())
}

#[tokio::test]
async fn test_malformed_hours_abort_or_skip() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/restaurants.json");
        then.status(200).json_body(serde_json::json!([
            {
                "cashBalance": 10.0,
                "menu": [],
                "openingHours": "Mon - Fri 9 am - 5 pm",
                "restaurantName": "Fine"
            },
            {
                "cashBalance": 20.0,
                "menu": [],
                "openingHours": "Everyday 9 am - 5 pm",
                "restaurantName": "Vague"
            }
        ]));
    });

    let strict = TestConfig {
        source: server.url("/restaurants.json"),
        output_path: output_path.clone(),
        skip_invalid_hours: false,
    };
    let engine = SeedEngine::new(SeedPipeline::new(LocalStorage::new(output_path.clone()), strict));
    let err = engine.run().await.unwrap_err();
    assert!(matches!(
        err,
        FrenzyError::OpeningHoursError { ref restaurant, .. } if restaurant == "Vague"
    ));
    assert!(!temp_dir.path().join("schedules.json").exists());

    let lenient = TestConfig {
        source: server.url("/restaurants.json"),
        output_path: output_path.clone(),
        skip_invalid_hours: true,
    };
    let engine = SeedEngine::new(SeedPipeline::new(LocalStorage::new(output_path), lenient));
    let report = engine.run().await?;

    assert_eq!(report.rejected, 1);
    assert_eq!(report.store.restaurants().len(), 2);
    assert_eq!(report.store.weekly_schedule(1).len(), 5);
    assert!(report.store.weekly_schedule(2).is_empty());

    Ok(())
}
