//! Servicio de progreso de matrículas
//!
//! Acumula horas completadas por categoría cuando una sesión llega a
//! "completed" y decide el cierre de la matrícula contra los umbrales
//! del curso.

use crate::models::course::Course;
use crate::models::enrollment::Enrollment;
use crate::models::schedule::SessionType;

/// Suma la duración de una sesión completada al contador de su categoría:
/// theory → teóricas; practical y exam → prácticas; vr_simulation → VR.
pub fn apply_completed_session(
    enrollment: &mut Enrollment,
    session_type: SessionType,
    hours: f64,
) {
    match session_type {
        SessionType::Theory => enrollment.theory_hours_completed += hours,
        SessionType::Practical | SessionType::Exam => {
            enrollment.practical_hours_completed += hours
        }
        SessionType::VrSimulation => enrollment.vr_hours_completed += hours,
    }
}

/// Todas las categorías alcanzan su umbral. Una categoría con cero horas
/// requeridas queda trivialmente satisfecha.
pub fn meets_requirements(enrollment: &Enrollment, course: &Course) -> bool {
    enrollment.theory_hours_completed >= course.theory_hours
        && enrollment.practical_hours_completed >= course.practical_hours
        && enrollment.vr_hours_completed >= course.vr_simulation_hours
}

/// Evalúa el cierre de la matrícula. Devuelve `true` solo cuando la
/// matrícula transiciona a "completed" en esta llamada; re-evaluar una
/// matrícula ya completada es un no-op (idempotente). El llamador debe
/// cascadear el estado del estudiante cuando devuelve `true`.
pub fn check_completion(enrollment: &mut Enrollment, course: &Course) -> bool {
    if enrollment.is_completed() {
        return false;
    }

    if meets_requirements(enrollment, course) {
        enrollment.status = "completed".to_string();
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn course(theory: f64, practical: f64, vr: f64) -> Course {
        Course {
            id: Uuid::new_v4(),
            code: "B-STD".to_string(),
            name: "Standard License B".to_string(),
            description: None,
            license_type: "non-pro".to_string(),
            theory_hours: theory,
            practical_hours: practical,
            vr_simulation_hours: vr,
            price: Decimal::new(550000, 2),
            validity_days: 365,
            is_active: true,
            created_at: Utc::now(),
        }
    }

    fn enrollment(theory: f64, practical: f64, vr: f64) -> Enrollment {
        Enrollment {
            id: Uuid::new_v4(),
            enrollment_number: "ENR-202412-0001".to_string(),
            student_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            enrollment_date: NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
            status: "active".to_string(),
            amount_paid: Decimal::ZERO,
            balance: Decimal::new(550000, 2),
            payment_status: "pending".to_string(),
            theory_hours_completed: theory,
            practical_hours_completed: practical,
            vr_hours_completed: vr,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_theory_session_adds_to_theory_hours() {
        let mut e = enrollment(12.0, 0.0, 0.0);
        apply_completed_session(&mut e, SessionType::Theory, 3.0);
        assert_eq!(e.theory_hours_completed, 15.0);
    }

    #[test]
    fn test_exam_session_adds_to_practical_hours() {
        let mut e = enrollment(0.0, 18.0, 0.0);
        apply_completed_session(&mut e, SessionType::Exam, 2.0);
        assert_eq!(e.practical_hours_completed, 20.0);

        apply_completed_session(&mut e, SessionType::Practical, 1.5);
        assert_eq!(e.practical_hours_completed, 21.5);
    }

    #[test]
    fn test_vr_session_adds_to_vr_hours() {
        let mut e = enrollment(0.0, 0.0, 4.0);
        apply_completed_session(&mut e, SessionType::VrSimulation, 1.0);
        assert_eq!(e.vr_hours_completed, 5.0);
    }

    #[test]
    fn test_completion_when_last_threshold_is_met() {
        let course = course(15.0, 20.0, 10.0);
        let mut e = enrollment(12.0, 20.0, 10.0);

        // Completar una sesión teórica de 3 horas: 12 + 3 = 15 >= 15
        apply_completed_session(&mut e, SessionType::Theory, 3.0);
        assert!(check_completion(&mut e, &course));
        assert_eq!(e.status, "completed");
    }

    #[test]
    fn test_no_completion_while_a_threshold_is_short() {
        let course = course(15.0, 20.0, 10.0);
        let mut e = enrollment(15.0, 19.0, 10.0);

        assert!(!check_completion(&mut e, &course));
        assert_eq!(e.status, "active");
    }

    #[test]
    fn test_completion_check_is_idempotent() {
        let course = course(15.0, 20.0, 10.0);
        let mut e = enrollment(15.0, 20.0, 10.0);

        assert!(check_completion(&mut e, &course));
        // Re-evaluar una matrícula ya completada no transiciona de nuevo
        assert!(!check_completion(&mut e, &course));
        assert_eq!(e.status, "completed");
    }

    #[test]
    fn test_zero_required_category_is_trivially_satisfied() {
        let course = course(15.0, 0.0, 0.0);
        let mut e = enrollment(15.0, 0.0, 0.0);

        assert!(check_completion(&mut e, &course));
    }
}
