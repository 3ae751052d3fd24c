//! Controlador de dashboards
//!
//! Agrega los contadores y listados de los tres paneles: administración,
//! portal del estudiante y portal del instructor. Cada panel se arma con
//! lecturas independientes; no hay caché.

use chrono::{Datelike, Duration, NaiveDate, Utc};
use sqlx::PgPool;

use crate::controllers::enrollment_controller::EnrollmentController;
use crate::controllers::schedule_controller::ScheduleController;
use crate::dto::dashboard_dto::{
    AdminDashboardResponse, DashboardStats, InstructorDashboardResponse,
    InstructorDashboardStats, SessionDistribution, StudentDashboardResponse,
    StudentDashboardStats, TrendPoint,
};
use crate::dto::schedule_dto::ScheduleDetail;
use crate::middleware::auth::AuthUser;
use crate::repositories::certificate_repository::CertificateRepository;
use crate::repositories::enrollment_repository::EnrollmentRepository;
use crate::repositories::instructor_repository::InstructorRepository;
use crate::repositories::schedule_repository::ScheduleRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;

const TODAYS_SCHEDULE_LIMIT: i64 = 10;
const RECENT_ENROLLMENTS_LIMIT: i64 = 5;
const UPCOMING_SCHEDULES_LIMIT: i64 = 5;
const TREND_MONTHS: u32 = 6;

pub struct DashboardController {
    students: StudentRepository,
    instructors: InstructorRepository,
    vehicles: VehicleRepository,
    enrollments: EnrollmentRepository,
    schedules: ScheduleRepository,
    certificates: CertificateRepository,
    enrollment_controller: EnrollmentController,
    schedule_controller: ScheduleController,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            students: StudentRepository::new(pool.clone()),
            instructors: InstructorRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            enrollments: EnrollmentRepository::new(pool.clone()),
            schedules: ScheduleRepository::new(pool.clone()),
            certificates: CertificateRepository::new(pool.clone()),
            enrollment_controller: EnrollmentController::new(pool.clone()),
            schedule_controller: ScheduleController::new(pool),
        }
    }

    /// Panel de administración
    pub async fn admin_dashboard(&self) -> Result<AdminDashboardResponse, AppError> {
        let today = Utc::now().date_naive();
        let month_start = today.with_day(1).unwrap_or(today);

        let stats = DashboardStats {
            total_students: self.students.count_all().await?,
            active_enrollments: self.enrollments.count_by_status("active").await?,
            todays_sessions: self.schedules.count_on_date(today).await?,
            monthly_revenue: self.enrollments.revenue_since(month_start).await?,
            pending_payments: self.enrollments.pending_balance_total().await?,
            active_instructors: self.instructors.count_active().await?,
            available_vehicles: self.vehicles.count_available().await?,
            certificates_issued: self
                .certificates
                .count_issued_in_month(today.year(), today.month())
                .await?,
        };

        let todays_schedule = {
            let schedules = self
                .schedules
                .list_on_date(today, TODAYS_SCHEDULE_LIMIT)
                .await?;
            let mut details = Vec::with_capacity(schedules.len());
            for schedule in schedules {
                details.push(self.schedule_controller.detail(schedule).await?);
            }
            details
        };

        let recent_enrollments = {
            let enrollments = self.enrollments.recent(RECENT_ENROLLMENTS_LIMIT).await?;
            let mut details = Vec::with_capacity(enrollments.len());
            for enrollment in enrollments {
                details.push(self.enrollment_controller.detail(enrollment).await?);
            }
            details
        };

        Ok(AdminDashboardResponse {
            stats,
            todays_schedule,
            recent_enrollments,
            enrollment_trend: self.enrollment_trend(today).await?,
            session_distribution: self.session_distribution().await?,
        })
    }

    /// Serie de matrículas de los últimos meses, en orden cronológico
    async fn enrollment_trend(&self, today: NaiveDate) -> Result<Vec<TrendPoint>, AppError> {
        let mut points = Vec::with_capacity(TREND_MONTHS as usize);

        for offset in (0..TREND_MONTHS).rev() {
            let (year, month) = months_back(today.year(), today.month(), offset);
            let count = self.enrollments.count_in_month(year, month).await?;
            let label = NaiveDate::from_ymd_opt(year, month, 1)
                .map(|d| d.format("%b %Y").to_string())
                .unwrap_or_else(|| format!("{}-{:02}", year, month));

            points.push(TrendPoint {
                month: label,
                count,
            });
        }

        Ok(points)
    }

    async fn session_distribution(&self) -> Result<SessionDistribution, AppError> {
        Ok(SessionDistribution {
            theory: self.schedules.count_by_type("theory").await?,
            practical: self.schedules.count_by_type("practical").await?,
            vr_simulation: self.schedules.count_by_type("vr_simulation").await?,
            exam: self.schedules.count_by_type("exam").await?,
        })
    }

    /// Panel del estudiante autenticado
    pub async fn student_dashboard(
        &self,
        auth: AuthUser,
    ) -> Result<StudentDashboardResponse, AppError> {
        let student_id = auth
            .student_id
            .ok_or_else(|| AppError::Forbidden("Student account required".to_string()))?;

        let enrollment = self.enrollment_controller.my_progress(auth).await?;
        let progress = enrollment
            .as_ref()
            .map(|e| e.progress_percentage)
            .unwrap_or(0.0);

        let today = Utc::now().date_naive();
        let upcoming = self
            .schedules
            .upcoming_by_student(student_id, today, UPCOMING_SCHEDULES_LIMIT)
            .await?;
        let mut upcoming_schedules: Vec<ScheduleDetail> = Vec::with_capacity(upcoming.len());
        for schedule in upcoming {
            upcoming_schedules.push(self.schedule_controller.detail(schedule).await?);
        }

        let stats = StudentDashboardStats {
            completed_sessions: self.schedules.count_completed_by_student(student_id).await?,
            certificates_earned: self.certificates.count_by_student(student_id).await?,
            progress,
        };

        Ok(StudentDashboardResponse {
            enrollment,
            upcoming_schedules,
            stats,
        })
    }

    /// Panel del instructor autenticado
    pub async fn instructor_dashboard(
        &self,
        auth: AuthUser,
    ) -> Result<InstructorDashboardResponse, AppError> {
        let instructor_id = auth
            .instructor_id
            .ok_or_else(|| AppError::Forbidden("Instructor account required".to_string()))?;

        let today = Utc::now().date_naive();
        let week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);

        let schedules = self
            .schedules
            .list_on_date_by_instructor(instructor_id, today)
            .await?;
        let mut todays_schedule = Vec::with_capacity(schedules.len());
        for schedule in schedules {
            todays_schedule.push(self.schedule_controller.detail(schedule).await?);
        }

        let stats = InstructorDashboardStats {
            todays_sessions: self
                .schedules
                .count_on_date_by_instructor(instructor_id, today)
                .await?,
            completed_this_week: self
                .schedules
                .count_completed_since_by_instructor(instructor_id, week_start)
                .await?,
            assigned_students: self.students.list_by_instructor(instructor_id).await?.len()
                as i64,
        };

        Ok(InstructorDashboardResponse {
            todays_schedule,
            stats,
        })
    }
}

/// Retrocede `offset` meses desde (year, month)
fn months_back(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 - offset as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_months_back_same_year() {
        assert_eq!(months_back(2025, 8, 0), (2025, 8));
        assert_eq!(months_back(2025, 8, 3), (2025, 5));
    }

    #[test]
    fn test_months_back_crosses_year_boundary() {
        assert_eq!(months_back(2025, 2, 5), (2024, 9));
        assert_eq!(months_back(2025, 1, 1), (2024, 12));
    }
}
