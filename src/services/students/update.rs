use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    faculties::responses::FacultySummary,
    students::{requests::UpdateStudentRequest, responses::StudentWithFaculty},
};
use crate::utils::validate::{validate_age, validate_name};

pub async fn update_student(
    service: &StudentService,
    student_id: i64,
    update_data: UpdateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let existing = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student lookup failed: {e}"),
                )),
            );
        }
    };

    // 更名时校验格式和唯一性（与原名称大小写不敏感比较）
    if let Some(ref name) = update_data.name {
        if let Err(msg) = validate_name(name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::StudentNameInvalid, msg)));
        }

        if !existing.name.eq_ignore_ascii_case(name) {
            match storage.student_name_taken(name).await {
                Ok(true) => {
                    return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                        ErrorCode::StudentAlreadyExists,
                        format!("Student with name '{name}' already exists"),
                    )));
                }
                Ok(false) => {}
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("Student lookup failed: {e}"),
                        ),
                    ));
                }
            }
        }
    }

    if let Some(age) = update_data.age
        && let Err(msg) = validate_age(age)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentAgeInvalid, msg)));
    }

    // 学院引用必须存在（显式 null 表示移出学院，无需校验）
    if let Some(Some(faculty_id)) = update_data.faculty_id {
        match storage.get_faculty_by_id(faculty_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::FacultyNotFound,
                    format!("Faculty with id {faculty_id} does not exist"),
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Faculty lookup failed: {e}"),
                    )),
                );
            }
        }
    }

    match storage.update_student(student_id, update_data).await {
        Ok(Some(_)) => match storage.get_student_with_faculty(student_id).await {
            Ok(Some((student, faculty))) => {
                let response = StudentWithFaculty {
                    id: student.id,
                    name: student.name,
                    age: student.age,
                    faculty: faculty.as_ref().map(FacultySummary::from),
                };
                Ok(HttpResponse::Ok().json(ApiResponse::success(
                    response,
                    "Student information updated successfully",
                )))
            }
            _ => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            ))),
        },
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::StudentUpdateFailed,
            format!("Failed to update student information: {e}"),
        ))),
    }
}
