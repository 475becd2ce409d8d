use turbojet_components::turbomachinery::{CompressionWork, ExpansionWork};
use turbojet_thermo::{State, fluid::Air};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature, Velocity},
    ratio::ratio,
    velocity::meter_per_second,
};

/// Total states at the engine stations.
///
/// Station 2 is the compressor face, 3 the compressor exit, 4 the turbine
/// inlet, and 5 the turbine exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stations {
    pub station_2: State<Air>,
    pub station_3: State<Air>,
    pub station_4: State<Air>,
    pub station_5: State<Air>,
}

/// Full result of a design-point evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CyclePerformance {
    pub stations: Stations,

    /// Specific work absorbed by the compressor.
    pub compressor_work: CompressionWork,

    /// Specific work extracted by the turbine, including shaft losses.
    pub turbine_work: ExpansionWork,

    /// Fuel mass flow per unit air mass flow.
    pub fuel_air_ratio: Ratio,

    /// Static temperature at the nozzle exit.
    pub nozzle_exit_temperature: ThermodynamicTemperature,

    /// Jet velocity at the nozzle exit.
    pub exhaust_velocity: Velocity,

    /// Net thrust per unit air mass flow, `(1 + f)·ve`.
    ///
    /// N·s/kg reduces to m/s, so this is held as a [`Velocity`].
    pub specific_thrust: Velocity,
}

impl CyclePerformance {
    /// Returns `(ve, thrust)` in m/s and N·s/kg.
    #[must_use]
    pub fn velocity_and_thrust(&self) -> (f64, f64) {
        (
            self.exhaust_velocity.get::<meter_per_second>(),
            self.specific_thrust.get::<meter_per_second>(),
        )
    }

    /// Thrust-specific fuel consumption `f/Fs`, in kg/(N·s).
    #[must_use]
    pub fn thrust_specific_fuel_consumption(&self) -> f64 {
        self.fuel_air_ratio.get::<ratio>() / self.specific_thrust.get::<meter_per_second>()
    }
}
