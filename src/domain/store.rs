use crate::domain::model::{Dish, RestaurantSnapshot};
use crate::hours::{is_open_at, DaySchedule, TimeOfDay, Weekday, WeeklySchedule};
use crate::utils::error::{FrenzyError, Result};
use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub type RestaurantId = usize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub cash_balance: f64,
    pub dishes: Vec<Dish>,
}

/// In-memory restaurant table with one schedule row per
/// (restaurant, weekday).
#[derive(Debug, Clone, Default)]
pub struct RestaurantStore {
    restaurants: Vec<Restaurant>,
    schedules: BTreeMap<(RestaurantId, Weekday), DaySchedule>,
}

impl RestaurantStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_restaurant(&mut self, name: &str, cash_balance: f64, dishes: Vec<Dish>) -> RestaurantId {
        let id = self.restaurants.len() + 1;
        self.restaurants.push(Restaurant {
            id,
            name: name.to_string(),
            cash_balance,
            dishes,
        });
        id
    }

    pub fn restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        id.checked_sub(1).and_then(|index| self.restaurants.get(index))
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    /// Adds a single weekday row. Fails if the restaurant already has one for
    /// that weekday.
    pub fn insert_schedule(&mut self, id: RestaurantId, day: DaySchedule) -> Result<()> {
        let restaurant = self
            .restaurant(id)
            .ok_or(FrenzyError::UnknownRestaurantError { id })?;

        if self.schedules.contains_key(&(id, day.weekday())) {
            return Err(FrenzyError::DuplicateScheduleError {
                restaurant: restaurant.name.clone(),
                weekday: day.weekday(),
            });
        }

        self.schedules.insert((id, day.weekday()), day);
        Ok(())
    }

    /// Drops every row the restaurant has and stores `schedule` in its place.
    pub fn replace_schedule(&mut self, id: RestaurantId, schedule: WeeklySchedule) -> Result<()> {
        if self.restaurant(id).is_none() {
            return Err(FrenzyError::UnknownRestaurantError { id });
        }

        self.schedules.retain(|(owner, _), _| *owner != id);
        for day in schedule {
            self.insert_schedule(id, day)?;
        }
        Ok(())
    }

    pub fn schedule_for(&self, id: RestaurantId, weekday: Weekday) -> Option<&DaySchedule> {
        self.schedules.get(&(id, weekday))
    }

    pub fn weekly_schedule(&self, id: RestaurantId) -> WeeklySchedule {
        self.schedules
            .range((id, Weekday::Monday)..=(id, Weekday::Sunday))
            .map(|(_, day)| *day)
            .collect()
    }

    pub fn schedule_count(&self) -> usize {
        self.schedules.len()
    }

    /// Restaurants whose entry for the weekday of `at` covers its time of day.
    /// Yesterday's overnight entries are not consulted.
    pub fn query_open_at(&self, at: NaiveDateTime) -> Vec<&Restaurant> {
        let weekday = Weekday::from(at.weekday());
        let time = TimeOfDay::from(at.time());

        self.restaurants
            .iter()
            .filter(|restaurant| is_open_at(self.schedule_for(restaurant.id, weekday), weekday, time))
            .collect()
    }

    pub fn snapshot(&self) -> Vec<RestaurantSnapshot> {
        self.restaurants
            .iter()
            .map(|restaurant| RestaurantSnapshot {
                id: restaurant.id,
                name: restaurant.name.clone(),
                cash_balance: restaurant.cash_balance,
                dishes: restaurant.dishes.len(),
                schedule: self.weekly_schedule(restaurant.id),
            })
            .collect()
    }
}

/// Outcome of one seed run.
#[derive(Debug, Clone)]
pub struct SeedReport {
    pub output_path: String,
    pub store: RestaurantStore,
    pub rejected: usize,
}
