//! 业务错误码
//!
//! 与 HTTP 状态码独立，放在统一响应体的 `code` 字段中。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 4000,
    NotFound = 4040,
    InternalServerError = 5000,

    // 学生相关
    StudentNotFound = 4101,
    StudentAlreadyExists = 4102,
    StudentNameInvalid = 4103,
    StudentAgeInvalid = 4104,
    StudentCreationFailed = 4105,
    StudentUpdateFailed = 4106,
    StudentDeleteFailed = 4107,

    // 学院相关
    FacultyNotFound = 4201,
    FacultyAlreadyExists = 4202,
    FacultyNameInvalid = 4203,
    FacultyColorInvalid = 4204,
    FacultyCreationFailed = 4205,
    FacultyUpdateFailed = 4206,
    FacultyDeleteFailed = 4207,

    // 头像相关
    AvatarNotFound = 4301,
    AvatarUploadFailed = 4302,
    FileTypeNotAllowed = 4303,
    FileSizeExceeded = 4304,
    MultifileUploadNotAllowed = 4305,
    AvatarDeleteFailed = 4306,
}
