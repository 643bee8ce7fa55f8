// SPDX-License-Identifier: PMPL-1.0-or-later

//! Farmer registration form and its validation.
//!
//! Required fields are name, phone and state; the registration view marks
//! exactly these. Everything else may be left blank.

use crate::error::{FieldError, FieldProblem, RegistrationError};
use crate::i18n::Msg;
use crate::types::{SoilType, UserProfile};

/// States offered at registration.
pub const STATES: &[&str] = &[
    "Maharashtra",
    "Punjab",
    "Uttar Pradesh",
    "Karnataka",
    "Tamil Nadu",
    "Andhra Pradesh",
    "Gujarat",
    "Rajasthan",
];

/// Crops offered at registration.
pub const CROPS: &[&str] = &[
    "Rice",
    "Wheat",
    "Cotton",
    "Sugarcane",
    "Maize",
    "Soybean",
    "Groundnut",
    "Pulses",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    State,
    District,
    Village,
    LandSize,
    SoilType,
    MainCrops,
    Experience,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Name,
            Field::Phone,
            Field::State,
            Field::District,
            Field::Village,
            Field::LandSize,
            Field::SoilType,
            Field::MainCrops,
            Field::Experience,
        ]
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Field::Name | Field::Phone | Field::State)
    }

    pub fn label(&self) -> Msg {
        match self {
            Field::Name => Msg::RegName,
            Field::Phone => Msg::RegPhone,
            Field::State => Msg::RegState,
            Field::District => Msg::RegDistrict,
            Field::Village => Msg::RegVillage,
            Field::LandSize => Msg::RegLandSize,
            Field::SoilType => Msg::RegSoilType,
            Field::MainCrops => Msg::RegMainCrops,
            Field::Experience => Msg::RegExperience,
        }
    }
}

impl FieldProblem {
    pub fn message(&self) -> Msg {
        match self {
            FieldProblem::Required => Msg::RegRequired,
            FieldProblem::NotANumber => Msg::RegNotANumber,
            FieldProblem::UnknownChoice => Msg::RegUnknownChoice,
        }
    }
}

/// Draft registration as typed by the farmer. Numeric fields stay text
/// until submission so partial input is never lost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub phone: String,
    pub state: String,
    pub district: String,
    pub village: String,
    pub land_size: String,
    pub soil_type: String,
    pub main_crops: Vec<String>,
    pub experience: String,
}

impl RegistrationForm {
    /// Select the crop if unselected, otherwise deselect it. Selection order
    /// is kept and duplicates never appear.
    pub fn toggle_crop(&mut self, crop: &str) {
        if let Some(pos) = self.main_crops.iter().position(|c| c == crop) {
            self.main_crops.remove(pos);
        } else {
            self.main_crops.push(crop.to_string());
        }
    }

    pub fn has_crop(&self, crop: &str) -> bool {
        self.main_crops.iter().any(|c| c == crop)
    }

    /// Text of a field as typed. Crops are comma-joined.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::MainCrops => self.main_crops.join(", "),
            _ => self.text(field).cloned().unwrap_or_default(),
        }
    }

    fn text(&self, field: Field) -> Option<&String> {
        match field {
            Field::Name => Some(&self.name),
            Field::Phone => Some(&self.phone),
            Field::State => Some(&self.state),
            Field::District => Some(&self.district),
            Field::Village => Some(&self.village),
            Field::LandSize => Some(&self.land_size),
            Field::SoilType => Some(&self.soil_type),
            Field::Experience => Some(&self.experience),
            Field::MainCrops => None,
        }
    }

    /// Editable text behind a field. `None` for the crop multi-select,
    /// which is changed through [`RegistrationForm::toggle_crop`].
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Phone => Some(&mut self.phone),
            Field::State => Some(&mut self.state),
            Field::District => Some(&mut self.district),
            Field::Village => Some(&mut self.village),
            Field::LandSize => Some(&mut self.land_size),
            Field::SoilType => Some(&mut self.soil_type),
            Field::Experience => Some(&mut self.experience),
            Field::MainCrops => None,
        }
    }

    /// Validate and build the profile. Every offending field is reported,
    /// in form order.
    pub fn submit(&self) -> Result<UserProfile, RegistrationError> {
        let mut errors = Vec::new();
        let mut flag = |field, problem| errors.push(FieldError { field, problem });

        let name = self.name.trim();
        if name.is_empty() {
            flag(Field::Name, FieldProblem::Required);
        }
        let phone = self.phone.trim();
        if phone.is_empty() {
            flag(Field::Phone, FieldProblem::Required);
        }

        let state = if self.state.trim().is_empty() {
            flag(Field::State, FieldProblem::Required);
            None
        } else {
            let found = canonical(STATES, &self.state);
            if found.is_none() {
                flag(Field::State, FieldProblem::UnknownChoice);
            }
            found
        };

        let land_size = match parse_optional::<f64>(&self.land_size) {
            Ok(Some(acres)) if !acres.is_finite() => {
                flag(Field::LandSize, FieldProblem::NotANumber);
                None
            }
            Ok(value) => value,
            Err(()) => {
                flag(Field::LandSize, FieldProblem::NotANumber);
                None
            }
        };

        let soil_type = if self.soil_type.trim().is_empty() {
            None
        } else {
            let parsed = SoilType::parse(&self.soil_type);
            if parsed.is_none() {
                flag(Field::SoilType, FieldProblem::UnknownChoice);
            }
            parsed
        };

        let mut main_crops: Vec<String> = Vec::new();
        let mut unknown_crop = false;
        for crop in &self.main_crops {
            match canonical(CROPS, crop) {
                Some(known) if !main_crops.iter().any(|c| c == known) => {
                    main_crops.push(known.to_string())
                }
                Some(_) => {}
                None => unknown_crop = true,
            }
        }
        if unknown_crop {
            flag(Field::MainCrops, FieldProblem::UnknownChoice);
        }

        let experience_years = match parse_optional::<u32>(&self.experience) {
            Ok(value) => value,
            Err(()) => {
                flag(Field::Experience, FieldProblem::NotANumber);
                None
            }
        };

        if !errors.is_empty() {
            return Err(RegistrationError::IncompleteRegistration(errors));
        }

        Ok(UserProfile {
            name: name.to_string(),
            phone: phone.to_string(),
            state: state.unwrap_or_default().to_string(),
            district: self.district.trim().to_string(),
            village: self.village.trim().to_string(),
            land_size,
            soil_type,
            main_crops,
            experience_years,
        })
    }
}

fn canonical(choices: &'static [&'static str], value: &str) -> Option<&'static str> {
    let value = value.trim();
    choices
        .iter()
        .copied()
        .find(|choice| choice.eq_ignore_ascii_case(value))
}

fn parse_optional<T: std::str::FromStr>(value: &str) -> Result<Option<T>, ()> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse::<T>().map(Some).map_err(|_| ())
}
