use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// Stagnation (total) state of a gas stream at an engine station.
///
/// A `State<Fluid>` pairs total temperature and total pressure with the
/// fluid it describes. The `fluid` field is usually a marker type such as
/// [`Air`](crate::fluid::Air).
///
/// # Example
///
/// ```
/// use turbojet_thermo::{State, fluid::Air};
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::pascal,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let station_2 = State::new(
///     ThermodynamicTemperature::new::<kelvin>(288.15),
///     Pressure::new::<pascal>(101_325.0),
///     Air,
/// );
/// assert_eq!(station_2.pressure.get::<pascal>(), 101_325.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given total temperature, total pressure, and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, pressure: Pressure, fluid: Fluid) -> Self {
        Self {
            temperature,
            pressure,
            fluid,
        }
    }
}
