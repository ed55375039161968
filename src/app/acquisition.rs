//! Acquisition task — periodic sensor sampling and publication.
//!
//! Each cycle reads temperature, humidity and the wind proxy, validates
//! the pair of climate values, and either overwrites the reading slot or
//! writes one diagnostic line. Failures are transient: there is no retry
//! counter and no backoff, the next period simply tries again.

use std::time::Duration;

use log::{debug, info};

use super::events::{MonitorEvent, TaskId};
use super::ports::{ClimateSensor, EventSink, LineSink, WindSensor};
use super::reading::Reading;
use crate::channels::ReadingSender;
use crate::diagnostics::{DiagnosticLog, SENSOR_FAILURE_LINE};
use crate::error::SensorError;

/// Outcome of one acquisition cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CycleOutcome {
    Published(Reading),
    Failed(SensorError),
}

/// Producer side of the pipeline. Owns the sensors.
pub struct AcquisitionTask<C, W, L, E>
where
    C: ClimateSensor,
    W: WindSensor,
    L: LineSink,
    E: EventSink,
{
    climate: C,
    wind: W,
    tx: ReadingSender,
    diag: DiagnosticLog<L>,
    events: E,
    period: Duration,
    cycles: u64,
    failures: u64,
}

impl<C, W, L, E> AcquisitionTask<C, W, L, E>
where
    C: ClimateSensor,
    W: WindSensor,
    L: LineSink,
    E: EventSink,
{
    pub fn new(
        climate: C,
        wind: W,
        tx: ReadingSender,
        diag: DiagnosticLog<L>,
        events: E,
        period: Duration,
    ) -> Self {
        Self {
            climate,
            wind,
            tx,
            diag,
            events,
            period,
            cycles: 0,
            failures: 0,
        }
    }

    /// Sample, validate, publish-or-log. Does not sleep.
    pub fn run_cycle(&mut self) -> CycleOutcome {
        self.cycles += 1;

        let temperature = self.climate.read_temperature();
        let humidity = self.climate.read_humidity();
        let wind_raw = self.wind.read_raw();

        match Reading::new(temperature, humidity, wind_raw) {
            Ok(reading) => {
                self.tx.publish(reading);
                debug!(
                    "ACQ | published T={:.1} H={:.1} wind_raw={}",
                    reading.temperature_c(),
                    reading.humidity_pct(),
                    reading.wind_raw()
                );
                self.events.emit(&MonitorEvent::Published(reading));
                CycleOutcome::Published(reading)
            }
            Err(e) => {
                self.failures += 1;
                self.diag.write_line(SENSOR_FAILURE_LINE);
                CycleOutcome::Failed(e)
            }
        }
    }

    /// Run forever: one cycle, then sleep for the period.
    pub fn run(mut self) -> ! {
        info!("ACQ | sampling every {} ms", self.period.as_millis());
        self.events.emit(&MonitorEvent::TaskStarted(TaskId::Acquisition));
        loop {
            self.run_cycle();
            std::thread::sleep(self.period);
        }
    }

    /// Cycles executed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Cycles that ended in a sensor failure.
    pub fn failures(&self) -> u64 {
        self.failures
    }
}
