//! Catalog snapshot and seed dataset

use crate::manufacturer::Manufacturer;
use crate::vehicle::Vehicle;
use serde::{Deserialize, Serialize};

/// Both record sequences, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub manufacturers: Vec<Manufacturer>,
    pub vehicles: Vec<Vehicle>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed dataset every process starts from
    pub fn seed() -> Self {
        let manufacturers = vec![
            Manufacturer::new(1, "Ferrari").with_revenue("€3,767 billion"),
            Manufacturer::new(2, "Lamborghini").with_revenue("€586 million"),
            Manufacturer::new(3, "BMW").with_revenue("€104.210 billion"),
            Manufacturer::new(4, "Mitsubishi Motors").with_revenue("¥2.514 trillion"),
            Manufacturer::new(5, "TVR").with_revenue("€3,767 Billion"),
            Manufacturer::new(6, "Nissan").with_revenue("€3,767 Trillion"),
        ];

        let vehicles = vec![
            Vehicle::new(1, "TVR Tuscan Speed Six", 5),
            Vehicle::new(2, "3.0 CS Alpina", 3),
            Vehicle::new(3, "Evolution VII", 4),
            Vehicle::new(4, "Murcielago LP-670 Super Veloce", 2),
            Vehicle::new(5, "R34 Skyline GTR Spec-V", 6),
            Vehicle::new(6, "E36 M3", 3),
            Vehicle::new(7, "E38 750i", 3),
            Vehicle::new(8, "L200", 4),
            Vehicle::new(9, "550 Maranello", 1),
            Vehicle::new(10, "3000GT", 4),
        ];

        tracing::debug!(
            "Seed catalog: {} manufacturers, {} vehicles",
            manufacturers.len(),
            vehicles.len()
        );

        Self {
            manufacturers,
            vehicles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ManufacturerId, VehicleId};

    #[test]
    fn test_seed_sizes_and_order() {
        let catalog = Catalog::seed();

        assert_eq!(catalog.manufacturers.len(), 6);
        assert_eq!(catalog.vehicles.len(), 10);

        let manufacturer_ids: Vec<i32> = catalog.manufacturers.iter().map(|m| m.id.get()).collect();
        assert_eq!(manufacturer_ids, (1..=6).collect::<Vec<_>>());

        let vehicle_ids: Vec<i32> = catalog.vehicles.iter().map(|v| v.id.get()).collect();
        assert_eq!(vehicle_ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_seed_literals() {
        let catalog = Catalog::seed();

        assert_eq!(
            catalog.manufacturers[3],
            Manufacturer::new(4, "Mitsubishi Motors").with_revenue("¥2.514 trillion")
        );
        assert_eq!(catalog.vehicles[4].name, "R34 Skyline GTR Spec-V");
        assert_eq!(catalog.vehicles[4].manufacturer_id, ManufacturerId(6));
        assert_eq!(catalog.vehicles[9].id, VehicleId(10));
        assert_eq!(catalog.vehicles[9].name, "3000GT");
    }
}
