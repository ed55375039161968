//! Two-thread pipeline tests: acquisition → slot → presentation.

use std::thread;
use std::time::{Duration, Instant};

use super::mock_hw::{
    EventRecorder, MockBuzzer, MockDisplay, MockIndicators, RecordingLines, ScriptedClimate,
    ScriptedWind,
};

use weatherstation::adapters::display::{OledDisplay, SimPanel};
use weatherstation::adapters::hardware::{
    BuzzerAdapter, ClimateAdapter, IndicatorAdapter, WindAdapter,
};
use weatherstation::app::acquisition::AcquisitionTask;
use weatherstation::app::classify::{SevereCause, Weather};
use weatherstation::app::events::{MonitorEvent, TaskId};
use weatherstation::app::presentation::{PresentationTask, StateHandle, TaskState};
use weatherstation::app::reading::Reading;
use weatherstation::channels::{ReadingReceiver, reading_channel};
use weatherstation::config::MonitorConfig;
use weatherstation::diagnostics::DiagnosticLog;
use weatherstation::drivers::buzzer::Buzzer;
use weatherstation::drivers::dht22::{Dht22, sim_set_reading};
use weatherstation::drivers::indicator_leds::IndicatorLeds;
use weatherstation::drivers::task_pin::spawn_task;
use weatherstation::drivers::wind_adc::{WindAdc, sim_set_wind_adc};
use weatherstation::pins;

fn spawn_presentation(rx: ReadingReceiver, events: EventRecorder) -> StateHandle {
    let task = PresentationTask::new(
        MockDisplay::default(),
        MockIndicators::default(),
        MockBuzzer::default(),
        events,
    );
    let state = task.state_handle();
    thread::spawn(move || {
        task.run(rx);
    });
    state
}

fn settles_to(state: &StateHandle, want: TaskState) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if state.get() == want {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}

/// Poll `events` until `n` readings were classified or two seconds pass.
fn wait_for_classified(events: &EventRecorder, n: usize) -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if events.classified() >= n {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}

fn classified_weathers(events: &EventRecorder) -> Vec<(Reading, Weather)> {
    events
        .snapshot()
        .into_iter()
        .filter_map(|e| match e {
            MonitorEvent::Classified {
                reading, weather, ..
            } => Some((reading, weather)),
            _ => None,
        })
        .collect()
}

#[test]
fn published_reading_reaches_presentation_thread() {
    let (tx, rx) = reading_channel();
    let events = EventRecorder::default();
    let state = spawn_presentation(rx, events.clone());
    thread::sleep(Duration::from_millis(20));
    assert_eq!(state.get(), TaskState::Waiting, "idle consumer must be parked");

    let mut acquisition = AcquisitionTask::new(
        ScriptedClimate::new(&[(26.0, 55.0)]),
        ScriptedWind::new(&[1000]),
        tx,
        DiagnosticLog::new(RecordingLines::default()),
        EventRecorder::default(),
        Duration::from_millis(2000),
    );
    acquisition.run_cycle();

    assert!(wait_for_classified(&events, 1), "presentation never ran");
    assert!(settles_to(&state, TaskState::Waiting));
    let seen = classified_weathers(&events);
    assert_eq!(seen[0].1, Weather::Clear);
    assert!(events
        .snapshot()
        .contains(&MonitorEvent::TaskStarted(TaskId::Presentation)));
}

#[test]
fn consumer_sees_only_latest_of_a_burst() {
    let (tx, rx) = reading_channel();
    let events = EventRecorder::default();

    let mut acquisition = AcquisitionTask::new(
        ScriptedClimate::new(&[(26.0, 55.0), (20.0, 70.0), (20.0, 90.0)]),
        ScriptedWind::new(&[1000, 1200, 3000]),
        tx,
        DiagnosticLog::new(RecordingLines::default()),
        EventRecorder::default(),
        Duration::from_millis(2000),
    );
    // Producer never blocks, even with nobody reading.
    for _ in 0..3 {
        acquisition.run_cycle();
    }

    spawn_presentation(rx, events.clone());
    assert!(wait_for_classified(&events, 1));
    thread::sleep(Duration::from_millis(50));

    let seen = classified_weathers(&events);
    assert_eq!(seen.len(), 1, "overwritten readings must not be replayed");
    assert_eq!(seen[0].0, Reading::new(20.0, 90.0, 3000).unwrap());
    assert_eq!(seen[0].1, Weather::Severe(SevereCause::Storm));
}

/// Whole host stack: simulated drivers behind the real adapters, both
/// tasks spawned through the task placement helper as on the device.
#[test]
fn simulated_board_classifies_end_to_end() {
    sim_set_reading(360, 500);
    sim_set_wind_adc(1000);

    let config = MonitorConfig::default();
    let (tx, rx) = reading_channel();
    let events = EventRecorder::default();

    let acquisition = AcquisitionTask::new(
        ClimateAdapter::new(Dht22::new()),
        WindAdapter::new(WindAdc::new(pins::WIND_ADC2_CHANNEL)),
        tx,
        DiagnosticLog::new(RecordingLines::default()),
        events.clone(),
        Duration::from_millis(config.sample_period_ms.into()),
    );
    let presentation = PresentationTask::new(
        OledDisplay::new(SimPanel::new()),
        IndicatorAdapter::new(IndicatorLeds::new()),
        BuzzerAdapter::new(Buzzer::new()),
        events.clone(),
    );

    spawn_task(&config.acquisition, "sensor\0", move || {
        acquisition.run();
    })
    .unwrap();
    spawn_task(&config.presentation, "display\0", move || {
        presentation.run(rx);
    })
    .unwrap();

    assert!(wait_for_classified(&events, 1));
    let (reading, weather) = classified_weathers(&events)[0];
    assert_eq!(weather, Weather::Severe(SevereCause::ExtremeHeat));
    assert!((reading.temperature_c() - 36.0).abs() < 1e-4);
    assert_eq!(reading.wind_pct(), 24);
}
