//! Input validation functions
//!
//! Range checks for activity log input and the plan-generation profile form.
//! Validators return a plain message so callers can wrap them in whatever
//! error type their layer uses.

use crate::models::UserProfile;

/// Validate workout duration in minutes
pub fn validate_duration_minutes(minutes: u32) -> Result<(), String> {
    if minutes == 0 {
        return Err("Duration must be at least 1 minute".to_string());
    }
    if minutes > 1440 {
        // 24 hours
        return Err("Duration cannot exceed 24 hours".to_string());
    }
    Ok(())
}

/// Validate a single water intake amount (in ml)
pub fn validate_water_amount_ml(amount_ml: u32) -> Result<(), String> {
    if amount_ml == 0 {
        return Err("Water amount must be at least 1 ml".to_string());
    }
    if amount_ml > 10000 {
        return Err("Water amount unreasonably high".to_string());
    }
    Ok(())
}

/// Validate the free-text workout label
pub fn validate_activity_type(activity_type: &str) -> Result<(), String> {
    if activity_type.trim().is_empty() {
        return Err("Activity type cannot be empty".to_string());
    }
    if activity_type.len() > 100 {
        return Err("Activity type too long".to_string());
    }
    Ok(())
}

/// Validate optional notes attached to a log entry
pub fn validate_notes(notes: &str) -> Result<(), String> {
    if notes.len() > 1000 {
        return Err("Notes too long".to_string());
    }
    Ok(())
}

// ============================================================================
// Profile Validation
// ============================================================================

/// Validate age in years
pub fn validate_age(age: u32) -> Result<(), String> {
    if age < 13 {
        return Err("Age must be at least 13 years".to_string());
    }
    if age > 120 {
        return Err("Age cannot exceed 120 years".to_string());
    }
    Ok(())
}

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate plan timeframe in weeks
pub fn validate_timeframe_weeks(weeks: u32) -> Result<(), String> {
    if weeks == 0 {
        return Err("Timeframe must be at least 1 week".to_string());
    }
    if weeks > 52 {
        return Err("Timeframe cannot exceed 52 weeks".to_string());
    }
    Ok(())
}

/// Validate the self-reported daily water intake baseline (in liters)
pub fn validate_water_baseline_l(liters: f64) -> Result<(), String> {
    if liters.is_nan() || liters.is_infinite() {
        return Err("Water intake must be a valid number".to_string());
    }
    if liters <= 0.0 {
        return Err("Water intake must be positive".to_string());
    }
    if liters > 10.0 {
        return Err("Water intake unreasonably high".to_string());
    }
    Ok(())
}

/// Validate the plan output language
pub fn validate_target_language(language: &str) -> Result<(), String> {
    if language.trim().is_empty() {
        return Err("Target language cannot be empty".to_string());
    }
    if language.len() > 50 {
        return Err("Target language too long".to_string());
    }
    Ok(())
}

/// Validate a complete generation profile, reporting the first violation
pub fn validate_profile(profile: &UserProfile) -> Result<(), String> {
    validate_age(profile.age)?;
    validate_weight_kg(profile.weight_kg)?;
    validate_height_cm(profile.height_cm)?;
    validate_timeframe_weeks(profile.timeframe_weeks)?;
    validate_water_baseline_l(profile.water_intake_l)?;
    validate_target_language(&profile.target_language)?;
    Ok(())
}
