//! Healthy-target evaluation.
//!
//! Recomputes the out-of-target flags of a dashboard from its numeric results and the
//! clinic's healthy-target reference. Flags the evaluation cannot decide keep the value
//! already on the dashboard: screenings, vaccines and other non-numeric measurements, results
//! that are missing, measurements without a configured target, and the gender-specific HDL
//! and waist targets when the patient's gender is unknown.

use registry_model::{Dashboard, HealthyTargetReference, HealthyTargetStatus};
use registry_types::{Gender, Measurement};

/// Evaluates `dashboard` against `reference` and returns the resulting status.
pub fn evaluate_dashboard(
    dashboard: &Dashboard,
    reference: &HealthyTargetReference,
    gender: Option<Gender>,
) -> HealthyTargetStatus {
    let mut status = dashboard.hts.clone();
    let mut check = |measurement: Measurement, value: Option<f64>| {
        evaluate(&mut status, reference, measurement, value);
    };

    check(Measurement::A1c, dashboard.a1c.as_ref().and_then(|r| r.value));
    check(
        Measurement::Triglycerides,
        dashboard.triglycerides.as_ref().and_then(|r| r.value),
    );
    check(Measurement::Tsh, dashboard.tsh.as_ref().and_then(|r| r.value));
    check(Measurement::T4, dashboard.t4.as_ref().and_then(|r| r.value));
    check(Measurement::Uacr, dashboard.uacr.as_ref().and_then(|r| r.value));
    check(Measurement::Egfr, dashboard.egfr.as_ref().and_then(|r| r.value));
    check(
        Measurement::Creatinine,
        dashboard.creatinine.as_ref().and_then(|r| r.value),
    );
    check(Measurement::Bmi, dashboard.bmi.as_ref().and_then(|r| r.value));
    check(
        Measurement::BloodPressureSystole,
        dashboard
            .blood_pressure
            .as_ref()
            .map(|bp| f64::from(bp.systolic_value)),
    );
    check(
        Measurement::BloodPressureDiastole,
        dashboard
            .blood_pressure
            .as_ref()
            .map(|bp| f64::from(bp.diastolic_value)),
    );
    check(
        Measurement::PhysicalActivity,
        dashboard
            .physical_activity
            .as_ref()
            .map(|pa| f64::from(pa.value)),
    );
    check(Measurement::Ast, dashboard.ast.as_ref().and_then(|r| r.value));
    check(Measurement::Alt, dashboard.alt.as_ref().and_then(|r| r.value));
    check(Measurement::Psa, dashboard.psa.as_ref().and_then(|r| r.value));

    // Post-MI LDL has no reference slot.
    if let Some(ldl) = dashboard.ldl.as_ref().filter(|ldl| !ldl.post_mi) {
        check(Measurement::Ldl, ldl.value);
    }

    if let Some(gender) = gender {
        check(gender.hdl(), dashboard.hdl.as_ref().and_then(|r| r.value));
        check(gender.waist(), dashboard.waist.as_ref().and_then(|r| r.value));
    }

    // Only fasting glucose has a target; the pc flag stays as reported.
    if dashboard.hts.last_glucose_fasting {
        check(
            Measurement::GlucoseAc,
            dashboard.glucose.as_ref().and_then(|r| r.value),
        );
    }

    status
}

fn evaluate(
    status: &mut HealthyTargetStatus,
    reference: &HealthyTargetReference,
    measurement: Measurement,
    value: Option<f64>,
) {
    let (Some(value), Some(range)) = (value, reference.get(measurement)) else {
        return;
    };

    let out_of_target = range.is_out_of_target(value);
    tracing::debug!(
        %measurement,
        value,
        lower = ?range.lower_bound,
        upper = ?range.upper_bound,
        out_of_target,
        "evaluated healthy target"
    );
    status.set_out_of_target(measurement, out_of_target);
}
