// ABOUTME: Measurement input for fitfindr-cli commands
// ABOUTME: Loads a profile row and overlays measurement flags given on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::path::PathBuf;

use clap::Args;
use fitfindr::errors::AppResult;
use fitfindr::models::{Gender, MeasurementField, PreferredFit, UserMeasurements};
use fitfindr::profile::ProfileRecord;
use tracing::debug;

/// Measurement sources shared by the commands
#[derive(Args, Debug, Default)]
pub struct MeasurementArgs {
    /// Profile row as JSON; flags below override its values
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Height in cm
    #[arg(long)]
    pub height: Option<String>,

    /// Weight in kg
    #[arg(long)]
    pub weight: Option<String>,

    /// Age in years
    #[arg(long)]
    pub age: Option<String>,

    /// Gender (male, female, other)
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Chest circumference in cm
    #[arg(long)]
    pub chest: Option<String>,

    /// Shoulder width in cm
    #[arg(long)]
    pub shoulder: Option<String>,

    /// Sleeve length in cm
    #[arg(long)]
    pub sleeve: Option<String>,

    /// Neck circumference in cm
    #[arg(long)]
    pub neck: Option<String>,

    /// Waist circumference in cm
    #[arg(long)]
    pub waist: Option<String>,

    /// Hip circumference in cm
    #[arg(long)]
    pub hip: Option<String>,

    /// Inseam length in cm
    #[arg(long)]
    pub inseam: Option<String>,

    /// Thigh circumference in cm
    #[arg(long)]
    pub thigh: Option<String>,

    /// Shoe size in EU units
    #[arg(long)]
    pub shoe_size: Option<String>,

    /// Preferred fit (slim, regular, loose)
    #[arg(long)]
    pub fit: Option<PreferredFit>,
}

impl MeasurementArgs {
    fn flag(&self, field: MeasurementField) -> Option<&String> {
        match field {
            MeasurementField::Height => self.height.as_ref(),
            MeasurementField::Weight => self.weight.as_ref(),
            MeasurementField::Age => self.age.as_ref(),
            MeasurementField::Chest => self.chest.as_ref(),
            MeasurementField::Shoulder => self.shoulder.as_ref(),
            MeasurementField::Sleeve => self.sleeve.as_ref(),
            MeasurementField::Neck => self.neck.as_ref(),
            MeasurementField::Waist => self.waist.as_ref(),
            MeasurementField::Hip => self.hip.as_ref(),
            MeasurementField::Inseam => self.inseam.as_ref(),
            MeasurementField::Thigh => self.thigh.as_ref(),
            MeasurementField::ShoeSize => self.shoe_size.as_ref(),
        }
    }
}

/// Build measurements from the profile file, then apply flags on top
pub fn load_measurements(args: &MeasurementArgs) -> AppResult<UserMeasurements> {
    let mut measurements = match &args.profile {
        Some(path) => {
            debug!(profile = %path.display(), "Loading profile");
            ProfileRecord::load(path)?.to_measurements()
        }
        None => UserMeasurements::default(),
    };

    for field in MeasurementField::ALL {
        if let Some(value) = args.flag(field) {
            measurements = measurements.with(field, value.clone());
        }
    }
    if let Some(gender) = args.gender {
        measurements = measurements.with_gender(gender);
    }
    if let Some(fit) = args.fit {
        measurements = measurements.with_preferred_fit(fit);
    }

    Ok(measurements)
}
