//! Controlador de sesiones
//!
//! Flujo de reserva: validación, chequeo de referencias, chequeo de
//! conflictos por recurso y alta. El chequeo y el alta son dos pasos sin
//! transacción; el contrato externo es rechazar reservas solapadas.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, Paginated, PaginationQuery};
use crate::dto::schedule_dto::{
    parse_time, AvailableSlotsQuery, CreateScheduleRequest, InstructorSlots, ScheduleDetail,
    ScheduleFilters, UpdateScheduleRequest,
};
use crate::middleware::auth::AuthUser;
use crate::models::schedule::{Schedule, SessionType, SCHEDULE_STATUSES};
use crate::repositories::course_repository::CourseRepository;
use crate::repositories::enrollment_repository::EnrollmentRepository;
use crate::repositories::instructor_repository::InstructorRepository;
use crate::repositories::schedule_repository::ScheduleRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::booking_service::{free_slots, has_conflict, BookedInterval, TIME_SLOTS};
use crate::services::progress_service::{apply_completed_session, check_completion};
use crate::utils::errors::AppError;

const DEFAULT_PER_PAGE: i64 = 20;

pub struct ScheduleController {
    schedules: ScheduleRepository,
    enrollments: EnrollmentRepository,
    instructors: InstructorRepository,
    vehicles: VehicleRepository,
    students: StudentRepository,
    courses: CourseRepository,
}

impl ScheduleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            schedules: ScheduleRepository::new(pool.clone()),
            enrollments: EnrollmentRepository::new(pool.clone()),
            instructors: InstructorRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            students: StudentRepository::new(pool.clone()),
            courses: CourseRepository::new(pool),
        }
    }

    /// Carga los nombres de las relaciones para los listados
    pub async fn detail(&self, schedule: Schedule) -> Result<ScheduleDetail, AppError> {
        let student_name = match self.enrollments.find_by_id(schedule.enrollment_id).await? {
            Some(enrollment) => self
                .students
                .find_by_id(enrollment.student_id)
                .await?
                .map(|s| s.full_name()),
            None => None,
        };

        let instructor_name = self
            .instructors
            .find_by_id(schedule.instructor_id)
            .await?
            .map(|i| i.full_name());

        let vehicle_name = match schedule.vehicle_id {
            Some(vehicle_id) => self
                .vehicles
                .find_by_id(vehicle_id)
                .await?
                .map(|v| v.display_name()),
            None => None,
        };

        Ok(ScheduleDetail::new(
            schedule,
            student_name,
            instructor_name,
            vehicle_name,
        ))
    }

    async fn details(&self, schedules: Vec<Schedule>) -> Result<Vec<ScheduleDetail>, AppError> {
        let mut details = Vec::with_capacity(schedules.len());
        for schedule in schedules {
            details.push(self.detail(schedule).await?);
        }
        Ok(details)
    }

    pub async fn list(
        &self,
        filters: ScheduleFilters,
    ) -> Result<Paginated<ScheduleDetail>, AppError> {
        let pagination = PaginationQuery {
            page: filters.page,
            per_page: filters.per_page,
        };

        let (schedules, total) = self
            .schedules
            .list(
                filters.date,
                filters.instructor_id,
                filters.status,
                filters.session_type,
                pagination.per_page(DEFAULT_PER_PAGE),
                pagination.offset(DEFAULT_PER_PAGE),
            )
            .await?;

        Ok(Paginated {
            data: self.details(schedules).await?,
            total,
            page: pagination.page(),
            per_page: pagination.per_page(DEFAULT_PER_PAGE),
        })
    }

    /// Reserva una sesión: valida, chequea conflictos y crea el registro
    pub async fn create(
        &self,
        request: CreateScheduleRequest,
    ) -> Result<ApiResponse<ScheduleDetail>, AppError> {
        request.validate()?;

        let session_type = SessionType::parse(&request.session_type)
            .ok_or_else(|| AppError::BadRequest("Invalid session type".to_string()))?;

        let start_time = parse_time(&request.start_time)
            .ok_or_else(|| AppError::BadRequest("Invalid start time format".to_string()))?;
        let end_time = parse_time(&request.end_time)
            .ok_or_else(|| AppError::BadRequest("Invalid end time format".to_string()))?;

        if end_time <= start_time {
            return Err(AppError::BadRequest(
                "End time must be after start time".to_string(),
            ));
        }

        if request.scheduled_date < Utc::now().date_naive() {
            return Err(AppError::BadRequest(
                "Scheduled date cannot be in the past".to_string(),
            ));
        }

        // Chequeos referenciales antes del chequeo de conflictos
        self.enrollments
            .find_by_id(request.enrollment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        self.instructors
            .find_by_id(request.instructor_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Instructor not found".to_string()))?;

        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicles
                .find_by_id(vehicle_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;
        }

        // Disponibilidad del instructor
        let instructor_intervals = self
            .schedules
            .instructor_intervals(request.instructor_id, request.scheduled_date)
            .await?;
        let booked: Vec<BookedInterval> = instructor_intervals
            .into_iter()
            .map(|(start, end)| BookedInterval::new(start, end))
            .collect();

        if has_conflict(&booked, start_time, end_time) {
            return Err(AppError::Conflict(
                "Instructor is not available at this time".to_string(),
            ));
        }

        // Disponibilidad del vehículo, solo para sesiones que lo ocupan
        if let Some(vehicle_id) = request.vehicle_id {
            if session_type.uses_vehicle() {
                let vehicle_intervals = self
                    .schedules
                    .vehicle_intervals(vehicle_id, request.scheduled_date)
                    .await?;
                let booked: Vec<BookedInterval> = vehicle_intervals
                    .into_iter()
                    .map(|(start, end)| BookedInterval::new(start, end))
                    .collect();

                if has_conflict(&booked, start_time, end_time) {
                    return Err(AppError::Conflict(
                        "Vehicle is not available at this time".to_string(),
                    ));
                }
            }
        }

        let schedule = self
            .schedules
            .create(
                request.enrollment_id,
                request.instructor_id,
                request.vehicle_id,
                session_type.as_str(),
                request.scheduled_date,
                start_time,
                end_time,
                request.notes,
            )
            .await?;

        log::info!(
            "📅 Sesión {} reservada: {} {} - {}",
            schedule.id,
            schedule.scheduled_date,
            schedule.start_time,
            schedule.end_time
        );

        let detail = self.detail(schedule).await?;
        Ok(ApiResponse::success_with_message(
            detail,
            "Schedule created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ScheduleDetail, AppError> {
        let schedule = self
            .schedules
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Schedule not found".to_string()))?;

        self.detail(schedule).await
    }

    /// Actualiza una sesión; la transición a "completed" dispara la
    /// contabilidad de progreso de la matrícula.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateScheduleRequest,
    ) -> Result<ApiResponse<ScheduleDetail>, AppError> {
        request.validate()?;

        if let Some(status) = &request.status {
            if !SCHEDULE_STATUSES.contains(&status.as_str()) {
                return Err(AppError::BadRequest("Invalid schedule status".to_string()));
            }
        }

        let current = self
            .schedules
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Schedule not found".to_string()))?;

        let completing = request.status.as_deref() == Some("completed")
            && current.status != "completed";

        let schedule = self
            .schedules
            .update(id, request.status, request.rating, request.feedback, request.notes)
            .await?;

        if completing {
            self.apply_progress_for_completed(&schedule).await?;
        }

        let detail = self.detail(schedule).await?;
        Ok(ApiResponse::success_with_message(
            detail,
            "Schedule updated successfully".to_string(),
        ))
    }

    /// Contabilidad de progreso tras la señal de sesión completada
    async fn apply_progress_for_completed(&self, schedule: &Schedule) -> Result<(), AppError> {
        let session_type = match SessionType::parse(&schedule.session_type) {
            Some(session_type) => session_type,
            None => {
                log::warn!(
                    "⚠️ Sesión {} con tipo desconocido '{}', progreso no aplicado",
                    schedule.id,
                    schedule.session_type
                );
                return Ok(());
            }
        };

        let mut enrollment = match self.enrollments.find_by_id(schedule.enrollment_id).await? {
            Some(enrollment) => enrollment,
            None => return Ok(()),
        };

        apply_completed_session(&mut enrollment, session_type, schedule.duration_hours());

        let mut updated = self
            .enrollments
            .set_progress_hours(
                enrollment.id,
                enrollment.theory_hours_completed,
                enrollment.practical_hours_completed,
                enrollment.vr_hours_completed,
            )
            .await?;

        let course = match self.courses.find_by_id(updated.course_id).await? {
            Some(course) => course,
            None => return Ok(()),
        };

        if check_completion(&mut updated, &course) {
            self.enrollments
                .update_status(updated.id, "completed")
                .await?;
            self.students
                .update_status(updated.student_id, "completed")
                .await?;
            log::info!("🏁 Matrícula completada: {}", updated.enrollment_number);
        }

        Ok(())
    }

    /// Slots libres por instructor para una fecha
    pub async fn available_slots(
        &self,
        query: AvailableSlotsQuery,
    ) -> Result<Vec<InstructorSlots>, AppError> {
        SessionType::parse(&query.session_type)
            .ok_or_else(|| AppError::BadRequest("Invalid session type".to_string()))?;

        let instructors = match query.instructor_id {
            Some(id) => {
                let instructor = self
                    .instructors
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Instructor not found".to_string()))?;
                vec![instructor]
            }
            None => self.instructors.list_active().await?,
        };

        let mut slots = Vec::new();
        for instructor in instructors {
            let booked = self
                .schedules
                .booked_start_times(instructor.id, query.date)
                .await?;

            let available = free_slots(&TIME_SLOTS, &booked);

            // Instructores sin slots libres se omiten del resultado
            if !available.is_empty() {
                slots.push(InstructorSlots {
                    instructor,
                    available_times: available
                        .iter()
                        .map(|t| t.format("%H:%M").to_string())
                        .collect(),
                });
            }
        }

        Ok(slots)
    }

    /// Sesiones del estudiante autenticado (portal)
    pub async fn my_schedules(
        &self,
        auth: AuthUser,
        pagination: PaginationQuery,
    ) -> Result<Paginated<ScheduleDetail>, AppError> {
        let student_id = match auth.student_id {
            Some(id) => id,
            None => {
                return Ok(Paginated {
                    data: Vec::new(),
                    total: 0,
                    page: pagination.page(),
                    per_page: pagination.per_page(DEFAULT_PER_PAGE),
                })
            }
        };

        let (schedules, total) = self
            .schedules
            .list_by_student(
                student_id,
                pagination.per_page(DEFAULT_PER_PAGE),
                pagination.offset(DEFAULT_PER_PAGE),
            )
            .await?;

        Ok(Paginated {
            data: self.details(schedules).await?,
            total,
            page: pagination.page(),
            per_page: pagination.per_page(DEFAULT_PER_PAGE),
        })
    }

    /// Sesiones del instructor autenticado (portal)
    pub async fn instructor_schedules(
        &self,
        auth: AuthUser,
        filters: ScheduleFilters,
    ) -> Result<Paginated<ScheduleDetail>, AppError> {
        let pagination = PaginationQuery {
            page: filters.page,
            per_page: filters.per_page,
        };

        let instructor_id = match auth.instructor_id {
            Some(id) => id,
            None => {
                return Ok(Paginated {
                    data: Vec::new(),
                    total: 0,
                    page: pagination.page(),
                    per_page: pagination.per_page(DEFAULT_PER_PAGE),
                })
            }
        };

        let (schedules, total) = self
            .schedules
            .list_by_instructor(
                instructor_id,
                filters.date,
                filters.from,
                filters.to,
                pagination.per_page(DEFAULT_PER_PAGE),
                pagination.offset(DEFAULT_PER_PAGE),
            )
            .await?;

        Ok(Paginated {
            data: self.details(schedules).await?,
            total,
            page: pagination.page(),
            per_page: pagination.per_page(DEFAULT_PER_PAGE),
        })
    }

    /// Marca una sesión como completada (usado por el flujo VR)
    pub async fn complete_session(&self, id: Uuid) -> Result<ScheduleDetail, AppError> {
        let response = self
            .update(
                id,
                UpdateScheduleRequest {
                    status: Some("completed".to_string()),
                    rating: None,
                    feedback: None,
                    notes: None,
                },
            )
            .await?;

        response
            .data
            .ok_or_else(|| AppError::Internal("Schedule update returned no data".to_string()))
    }
}
