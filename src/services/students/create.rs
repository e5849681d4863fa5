use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::StudentService;
use crate::models::{
    ApiResponse, ErrorCode,
    faculties::responses::FacultySummary,
    students::{requests::CreateStudentRequest, responses::StudentWithFaculty},
};
use crate::utils::validate::{validate_age, validate_name};

pub async fn create_student(
    service: &StudentService,
    student_data: CreateStudentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 验证名称
    if let Err(msg) = validate_name(&student_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentNameInvalid, msg)));
    }

    // 验证年龄
    if let Err(msg) = validate_age(student_data.age) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::StudentAgeInvalid, msg)));
    }

    let storage = service.get_storage(request);

    // 名称唯一性检查
    match storage.student_name_taken(&student_data.name).await {
        Ok(true) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::StudentAlreadyExists,
                format!("Student with name '{}' already exists", student_data.name),
            )));
        }
        Ok(false) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Student lookup failed: {e}"),
                )),
            );
        }
    }

    // 学院引用必须存在
    let faculty = match student_data.faculty_id {
        Some(faculty_id) => match storage.get_faculty_by_id(faculty_id).await {
            Ok(Some(faculty)) => Some(faculty),
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
        },
        None => None,
    };

    match storage.create_student(student_data).await {
        Ok(student) => {
            let response = StudentWithFaculty {
                id: student.id,
                name: student.name,
                age: student.age,
                faculty: faculty.as_ref().map(FacultySummary::from),
            };
            Ok(HttpResponse::Created().json(ApiResponse::success(response, "学生创建成功")))
        }
        Err(e) => {
            let msg = format!("Student creation failed: {e}");
            error!("{}", msg);
            // 判断是否唯一约束冲突
            if msg.contains("UNIQUE constraint failed") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::StudentAlreadyExists,
                    "Student name already exists",
                )))
            } else {
                Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::StudentCreationFailed,
                    msg,
                )))
            }
        }
    }
}
