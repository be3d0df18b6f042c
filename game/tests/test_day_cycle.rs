use game::api::Event;
use game::economy::Upgrade;
use game::planting::Planting::PlotHarvested;
use game::planting::{Plot, Stage};
use game::timing::Timing::DayStarted;
use game::weather::Forecast;

use crate::testing::{at, sown, GameTestScenario, CORNER};

mod testing;

#[test]
fn test_day_counter_starts_at_one() {
    let scenario = GameTestScenario::new()
        .when_days_pass(3)
        .then_day_events_should_contain(Event::Timing(vec![DayStarted { day: 4 }]));
    assert_eq!(scenario.game.day(), 4);
}

#[test]
fn test_rain_waters_for_exact_number_of_days() {
    let scenario = GameTestScenario::new()
        .given_rain(3)
        .given_plot(CORNER, Plot::dug())
        .when_days_pass(2);
    assert!(scenario.game.weather.raining);
    let scenario = scenario
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.water, 3));
    assert!(!scenario.game.weather.raining);
    assert_eq!(scenario.game.weather.rain_days_remaining, 0);
    scenario
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.water, 3));
}

#[test]
fn test_rain_skips_undug_plots() {
    GameTestScenario::new()
        .given_rain(1)
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.water, 0));
}

#[test]
fn test_forecast_arrives_at_next_day_boundary() {
    // forecast 40% with a winning draw for 2 days, rain stop chance 55%
    let scenario = GameTestScenario::with_dice(&[40, 10, 2, 55]).given_plot(CORNER, Plot::dug());
    assert_eq!(
        scenario.game.weather.forecast,
        Forecast {
            chance: 40,
            duration: 2
        }
    );
    let scenario = scenario
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.water, 0));
    let weather = &scenario.game.weather;
    assert!(weather.raining);
    assert_eq!(weather.rain_days_remaining, 2);
    assert_eq!(weather.stop_chance, Some(55));
    assert_eq!(weather.forecast.duration, 0);

    let scenario = scenario
        .when_days_pass(2)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.water, 2));
    assert!(!scenario.game.weather.raining);
    assert_eq!(scenario.game.weather.stop_chance, None);
}

#[test]
fn test_forecast_rolls_stay_in_climate_ranges() {
    let mut game = game::Game::new(
        game::rules::Rules::default(),
        Box::new(game::math::Random::with_seed(2024)),
    );
    for _ in 0..200 {
        game.advance_day();
        let forecast = game.weather.forecast;
        assert!((10..=60).contains(&forecast.chance));
        assert!(forecast.duration <= 3);
        if let Some(stop_chance) = game.weather.stop_chance {
            assert!((30..=70).contains(&stop_chance));
        }
    }
}

#[test]
fn test_irrigation_keeps_crops_alive() {
    GameTestScenario::new()
        .given_upgrade(Upgrade::Irrigation)
        .given_plot(CORNER, sown(Stage::Sprout))
        .given_plot(at(1, 0), Plot::dug())
        .when_days_pass(4)
        .then_plot_should_be(CORNER, |plot| {
            assert_eq!(plot.stage, Stage::Mature);
            assert_eq!(plot.days_since_water, 0);
            assert_eq!(plot.water, 0);
        })
        .then_plot_should_be(at(1, 0), |plot| assert_eq!(plot.water, 0));
}

#[test]
fn test_fertilizer_system_speeds_up_every_crop() {
    GameTestScenario::new()
        .given_upgrade(Upgrade::FertilizerSystem)
        .given_plot(
            CORNER,
            Plot {
                water: 2,
                ..sown(Stage::Sprout)
            },
        )
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.stage, Stage::Growing))
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.stage, Stage::Mature));
}

#[test]
fn test_tractor_harvests_ripe_crops() {
    GameTestScenario::new()
        .given_upgrade(Upgrade::Tractor)
        .given_plot(
            CORNER,
            Plot {
                water: 1,
                growth_days: 1,
                ..sown(Stage::Growing)
            },
        )
        .given_plot(at(2, 2), sown(Stage::Dead))
        .when_days_pass(1)
        .then_day_events_should_contain(Event::Planting(vec![PlotHarvested { tile: CORNER }]))
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot, &Plot::dug()))
        .then_plot_should_be(at(2, 2), |plot| assert!(plot.is_dead()))
        .then_player_should_be(|player| assert_eq!(player.potatoes, 1));
}

#[test]
fn test_mature_crop_waits_without_tractor() {
    GameTestScenario::new()
        .given_plot(
            CORNER,
            Plot {
                water: 1,
                ..sown(Stage::Mature)
            },
        )
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.stage, Stage::Mature))
        .then_player_should_be(|player| assert_eq!(player.potatoes, 0));
}

#[test]
fn test_cheat_rain_starts_immediately() {
    let mut scenario = GameTestScenario::new().given_plot(CORNER, Plot::dug());
    scenario.game.cheat_rain(2);
    assert!(scenario.game.weather.raining);
    assert_eq!(scenario.game.weather.forecast.chance, 100);
    let mut scenario = scenario
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.water, 1));
    scenario.game.cheat_clear_weather();
    scenario
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.water, 1));
}

#[test]
fn test_census_counts_plots() {
    let scenario = GameTestScenario::new()
        .given_plot(CORNER, Plot::dug())
        .given_plot(
            at(1, 1),
            Plot {
                water: 1,
                ..sown(Stage::Sprout)
            },
        );
    let census = scenario.game.census();
    assert_eq!(census.dug, 2);
    assert_eq!(census.sown, 1);
    assert_eq!(census.watered, 1);
}

#[test]
fn test_tractor_ignores_unsown_mature_plot() {
    GameTestScenario::new()
        .given_upgrade(Upgrade::Tractor)
        .given_plot(
            CORNER,
            Plot {
                dug: true,
                stage: Stage::Mature,
                ..Plot::default()
            },
        )
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.stage, Stage::Mature))
        .then_player_should_be(|player| assert_eq!(player.potatoes, 0));
}

#[test]
fn test_cheat_forecast_rains_from_next_day() {
    let mut scenario = GameTestScenario::new().given_plot(CORNER, Plot::dug());
    scenario.game.cheat_forecast(Forecast {
        chance: 100,
        duration: 2,
    });
    assert!(!scenario.game.weather.raining);
    let scenario = scenario
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.water, 0));
    assert!(scenario.game.weather.raining);
    assert_eq!(scenario.game.weather.rain_days_remaining, 2);
    let scenario = scenario
        .when_days_pass(2)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.water, 2));
    assert!(!scenario.game.weather.raining);
    scenario
        .when_days_pass(1)
        .then_plot_should_be(CORNER, |plot| assert_eq!(plot.water, 2));
}
