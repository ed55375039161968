//! End-to-end presentation scenarios: one reading in, indicators, tones and
//! screen out.

use super::mock_hw::{
    EventRecorder, LoggedBuzzer, LoggedDisplay, LoggedIndicators, MockBuzzer, MockDisplay,
    MockIndicators, OutputCall, OutputLog,
};

use weatherstation::app::classify::{Indicator, SevereCause, Weather};
use weatherstation::app::events::MonitorEvent;
use weatherstation::app::feedback::{CLEAR_ALERT, CLOUDY_ALERT, RAIN_ALERT, SEVERE_ALERT, Tone};
use weatherstation::app::presentation::{PresentationTask, TaskState};
use weatherstation::app::reading::Reading;

type Task = PresentationTask<MockDisplay, MockIndicators, MockBuzzer, EventRecorder>;

fn make_task() -> (Task, EventRecorder) {
    let events = EventRecorder::default();
    let task = PresentationTask::new(
        MockDisplay::default(),
        MockIndicators::default(),
        MockBuzzer::default(),
        events.clone(),
    );
    (task, events)
}

struct Expect {
    weather: Weather,
    indicator: Indicator,
    tones: &'static [Tone],
    screen: [&'static str; 4],
}

fn run_scenario(temperature: f32, humidity: f32, wind_raw: u16, expect: &Expect) {
    let (mut task, events) = make_task();
    let reading = Reading::new(temperature, humidity, wind_raw).unwrap();

    let weather = task.process(&reading);
    assert_eq!(weather, expect.weather);
    assert_eq!(task.state(), TaskState::Waiting);

    let (display, leds, buzzer) = task.parts();
    // All four cleared first, then exactly the one for this class.
    assert_eq!(leds.calls.len(), Indicator::COUNT + 1);
    let (resets, set) = leds.calls.split_at(Indicator::COUNT);
    for ind in Indicator::ALL {
        assert!(resets.contains(&(ind, false)), "{:?} not reset", ind);
    }
    assert_eq!(set, [(expect.indicator, true)]);
    assert_eq!(leds.bank.active(), Some(expect.indicator));
    assert_eq!(leds.bank.lit_count(), 1);
    assert_eq!(buzzer.tones, expect.tones);
    assert_eq!(display.visible_text(), expect.screen);

    let last = events.snapshot().pop();
    assert!(
        matches!(last, Some(MonitorEvent::Classified { weather: w, .. }) if w == expect.weather),
        "last event should be Classified, got {:?}",
        last
    );
}

#[test]
fn extreme_heat_overrides_everything() {
    run_scenario(
        36.0,
        50.0,
        1000,
        &Expect {
            weather: Weather::Severe(SevereCause::ExtremeHeat),
            indicator: Indicator::Severe,
            tones: &SEVERE_ALERT,
            screen: [
                "Temp: 36.00\u{00b0}C",
                "Humidity: 50.00 %",
                "Wind: 24 %",
                "Cuaca: SUHU TINGGI",
            ],
        },
    );
}

#[test]
fn warm_dry_calm_is_clear() {
    run_scenario(
        26.0,
        55.0,
        1000,
        &Expect {
            weather: Weather::Clear,
            indicator: Indicator::Clear,
            tones: &CLEAR_ALERT,
            screen: [
                "Temp: 26.00\u{00b0}C",
                "Humidity: 55.00 %",
                "Wind: 24 %",
                "Cuaca: CERAH",
            ],
        },
    );
}

#[test]
fn cool_moderate_humidity_is_cloudy() {
    run_scenario(
        20.0,
        70.0,
        1200,
        &Expect {
            weather: Weather::Cloudy,
            indicator: Indicator::Cloudy,
            tones: &CLOUDY_ALERT,
            screen: [
                "Temp: 20.00\u{00b0}C",
                "Humidity: 70.00 %",
                "Wind: 29 %",
                "Cuaca: BERAWAN",
            ],
        },
    );
}

#[test]
fn humid_moderate_wind_is_rain() {
    // 2000 * 100 / 4095 truncates to 48.
    run_scenario(
        20.0,
        85.0,
        2000,
        &Expect {
            weather: Weather::Rain,
            indicator: Indicator::Rain,
            tones: &RAIN_ALERT,
            screen: [
                "Temp: 20.00\u{00b0}C",
                "Humidity: 85.00 %",
                "Wind: 48 %",
                "Cuaca: HUJAN",
            ],
        },
    );
}

#[test]
fn humid_and_windy_falls_back_to_storm() {
    run_scenario(
        20.0,
        90.0,
        3000,
        &Expect {
            weather: Weather::Severe(SevereCause::Storm),
            indicator: Indicator::Severe,
            tones: &SEVERE_ALERT,
            screen: [
                "Temp: 20.00\u{00b0}C",
                "Humidity: 90.00 %",
                "Wind: 73 %",
                "Cuaca: BADAI",
            ],
        },
    );
}

#[test]
fn class_change_switches_the_single_lit_indicator() {
    let (mut task, _events) = make_task();

    task.process(&Reading::new(26.0, 55.0, 1000).unwrap());
    task.process(&Reading::new(20.0, 90.0, 3000).unwrap());

    let (_, leds, _) = task.parts();
    assert_eq!(leds.bank.active(), Some(Indicator::Severe));
    assert!(!leds.bank.is_on(Indicator::Clear));
    assert_eq!(task.last_weather(), Some(Weather::Severe(SevereCause::Storm)));
    assert_eq!(task.processed(), 2);
}

#[test]
fn display_failure_keeps_previous_frame_and_still_drives_outputs() {
    let events = EventRecorder::default();
    let mut task = PresentationTask::new(
        MockDisplay::failing_after(1),
        MockIndicators::default(),
        MockBuzzer::default(),
        events.clone(),
    );

    task.process(&Reading::new(26.0, 55.0, 1000).unwrap());
    let weather = task.process(&Reading::new(20.0, 85.0, 2000).unwrap());
    assert_eq!(weather, Weather::Rain);

    let (display, leds, buzzer) = task.parts();
    assert_eq!(display.presented.len(), 1);
    assert_eq!(display.visible_text()[3], "Cuaca: CERAH");
    assert_eq!(leds.bank.active(), Some(Indicator::Rain));
    assert_eq!(buzzer.tones, [CLEAR_ALERT[0], RAIN_ALERT[0]]);
    assert!(events.snapshot().contains(&MonitorEvent::FrameDropped));
}

#[test]
fn indicators_then_tones_then_screen() {
    let log = OutputLog::default();
    let mut task = PresentationTask::new(
        LoggedDisplay(log.clone()),
        LoggedIndicators(log.clone()),
        LoggedBuzzer(log.clone()),
        EventRecorder::default(),
    );

    task.process(&Reading::new(36.0, 50.0, 1000).unwrap());

    let mut expected: Vec<OutputCall> = Indicator::ALL
        .iter()
        .map(|&ind| OutputCall::Indicator(ind, false))
        .collect();
    expected.push(OutputCall::Indicator(Indicator::Severe, true));
    expected.extend(SEVERE_ALERT.iter().map(|t| OutputCall::Tone(t.frequency_hz)));
    expected.push(OutputCall::Present);
    assert_eq!(log.calls(), expected);
}
