use crate::domain::store::{RestaurantStore, SeedReport};
use crate::core::{ConfigProvider, ParsedRestaurant, Pipeline, RestaurantRecord, Storage, TransformResult};
use crate::domain::model::RejectedHours;
use crate::hours::parse_schedule;
use crate::utils::error::{FrenzyError, Result};
use crate::utils::validation::{validate_source, DataSource};
use reqwest::Client;

pub const SNAPSHOT_FILE: &str = "schedules.json";

/// Fetches the restaurant feed, parses every opening-hours string and loads
/// the result into a fresh [`RestaurantStore`].
pub struct SeedPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> SeedPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    async fn fetch(&self, source: DataSource) -> Result<Vec<u8>> {
        match source {
            DataSource::Http(url) => {
                tracing::debug!("Making API request to: {}", url);
                let response = self.client.get(url).send().await?;
                tracing::debug!("API response status: {}", response.status());

                let body = response.error_for_status()?.bytes().await?;
                Ok(body.to_vec())
            }
            DataSource::File(path) => {
                tracing::debug!("Reading restaurant data from: {}", path.display());
                Ok(tokio::fs::read(path).await?)
            }
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SeedPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<RestaurantRecord>> {
        let source = validate_source("source", self.config.source())?;
        let body = self.fetch(source).await?;

        let records: Vec<RestaurantRecord> = serde_json::from_slice(&body)?;
        Ok(records)
    }

    async fn transform(&self, data: Vec<RestaurantRecord>) -> Result<TransformResult> {
        let mut result = TransformResult::default();

        for record in data {
            let hours = record.opening_hours.as_deref().unwrap_or_default();

            match parse_schedule(hours) {
                Ok(schedule) => {
                    tracing::debug!(
                        "{}: {} weekdays from {:?}",
                        record.restaurant_name,
                        schedule.len(),
                        hours
                    );
                    result.restaurants.push(ParsedRestaurant {
                        record,
                        schedule: Some(schedule),
                    });
                }
                Err(error) if self.config.skip_invalid_hours() => {
                    tracing::warn!(
                        "Keeping {:?} without a schedule: {}",
                        record.restaurant_name,
                        error
                    );
                    result.rejected.push(RejectedHours {
                        restaurant: record.restaurant_name.clone(),
                        error,
                    });
                    result.restaurants.push(ParsedRestaurant {
                        record,
                        schedule: None,
                    });
                }
                Err(source) => {
                    return Err(FrenzyError::OpeningHoursError {
                        restaurant: record.restaurant_name,
                        source,
                    });
                }
            }
        }

        Ok(result)
    }

    async fn load(&self, result: TransformResult) -> Result<SeedReport> {
        let mut store = RestaurantStore::new();

        for parsed in result.restaurants {
            let record = parsed.record;
            let dishes = record.menu.into_iter().map(Into::into).collect();
            let id = store.add_restaurant(&record.restaurant_name, record.cash_balance, dishes);

            if let Some(schedule) = parsed.schedule {
                store.replace_schedule(id, schedule)?;
            }
        }

        let json_data = serde_json::to_vec_pretty(&store.snapshot())?;
        tracing::debug!("Writing snapshot ({} bytes) to storage", json_data.len());
        self.storage.write_file(SNAPSHOT_FILE, &json_data).await?;

        Ok(SeedReport {
            output_path: format!("{}/{}", self.config.output_path(), SNAPSHOT_FILE),
            store,
            rejected: result.rejected.len(),
        })
    }
}
