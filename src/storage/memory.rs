//! 内存存储实现（测试用）
//!
//! 用 HashMap 模拟数据库语义（级联删除、引用置空、分页），
//! 让服务层测试不依赖真实数据库。

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::{
    PaginationInfo,
    avatars::{
        entities::{Avatar, AvatarPreview},
        requests::UpsertAvatarData,
        responses::{AvatarInfo, AvatarPageResponse},
    },
    faculties::{
        entities::Faculty,
        requests::{CreateFacultyRequest, FacultyListQuery, UpdateFacultyRequest},
        responses::FacultyListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::storage::Storage;

#[derive(Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    students: HashMap<i64, Student>,
    faculties: HashMap<i64, Faculty>,
    // key: student_id；元组第二项是缩略图字节
    avatars: HashMap<i64, (Avatar, Vec<u8>)>,
    next_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn paginate<T>(items: Vec<T>, page: i64, size: i64) -> (Vec<T>, PaginationInfo) {
    let page = page.max(1);
    let size = size.clamp(1, 100);
    let total = items.len() as i64;
    let total_pages = if total == 0 { 0 } else { (total + size - 1) / size };
    let start = ((page - 1) * size) as usize;
    let out: Vec<T> = items.into_iter().skip(start).take(size as usize).collect();
    (
        out,
        PaginationInfo {
            page,
            page_size: size,
            total,
            total_pages,
        },
    )
}

#[async_trait]
impl Storage for MemoryStorage {
    // 学生模块
    async fn create_student(&self, req: CreateStudentRequest) -> Result<Student> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        let now = chrono::Utc::now();
        let student = Student {
            id,
            name: req.name,
            age: req.age,
            faculty_id: req.faculty_id,
            created_at: now,
            updated_at: now,
        };
        inner.students.insert(id, student.clone());
        Ok(student)
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.students.get(&id).cloned())
    }

    async fn get_student_with_faculty(
        &self,
        id: i64,
    ) -> Result<Option<(Student, Option<Faculty>)>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.students.get(&id).cloned().map(|student| {
            let faculty = student
                .faculty_id
                .and_then(|fid| inner.faculties.get(&fid).cloned());
            (student, faculty)
        }))
    }

    async fn student_name_taken(&self, name: &str) -> Result<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .students
            .values()
            .any(|s| s.name.eq_ignore_ascii_case(name)))
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let inner = self.inner.lock().unwrap();
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut items: Vec<Student> = inner
            .students
            .values()
            .filter(|s| match &needle {
                Some(n) => s.name.to_lowercase().contains(n),
                None => true,
            })
            .cloned()
            .collect();
        items.sort_by_key(|s| std::cmp::Reverse(s.id));

        let (items, pagination) =
            paginate(items, query.page.unwrap_or(1), query.size.unwrap_or(10));
        Ok(StudentListResponse { items, pagination })
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(student) = inner.students.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            student.name = name;
        }
        if let Some(age) = update.age {
            student.age = age;
        }
        if let Some(faculty_id) = update.faculty_id {
            student.faculty_id = faculty_id;
        }
        student.updated_at = chrono::Utc::now();

        Ok(Some(student.clone()))
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let removed = inner.students.remove(&id).is_some();
        if removed {
            // 模拟外键级联删除头像记录
            inner.avatars.remove(&id);
        }
        Ok(removed)
    }

    async fn list_students_by_age(&self, age: i32) -> Result<Vec<Student>> {
        let inner = self.inner.lock().unwrap();
        let mut items: Vec<Student> = inner
            .students
            .values()
            .filter(|s| s.age == age)
            .cloned()
            .collect();
        items.sort_by_key(|s| s.id);
        Ok(items)
    }

    async fn list_students_by_age_between(&self, min: i32, max: i32) -> Result<Vec<Student>> {
        let inner = self.inner.lock().unwrap();
        let mut items: Vec<Student> = inner
            .students
            .values()
            .filter(|s| s.age >= min && s.age <= max)
            .cloned()
            .collect();
        items.sort_by_key(|s| s.id);
        Ok(items)
    }

    async fn list_students_by_faculty(&self, faculty_id: i64) -> Result<Vec<Student>> {
        let inner = self.inner.lock().unwrap();
        let mut items: Vec<Student> = inner
            .students
            .values()
            .filter(|s| s.faculty_id == Some(faculty_id))
            .cloned()
            .collect();
        items.sort_by_key(|s| s.id);
        Ok(items)
    }

    async fn count_students(&self) -> Result<u64> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.students.len() as u64)
    }

    async fn average_student_age(&self) -> Result<Option<f64>> {
        let inner = self.inner.lock().unwrap();
        if inner.students.is_empty() {
            return Ok(None);
        }
        let sum: i64 = inner.students.values().map(|s| s.age as i64).sum();
        Ok(Some(sum as f64 / inner.students.len() as f64))
    }

    async fn list_latest_students(&self, limit: u64) -> Result<Vec<Student>> {
        let inner = self.inner.lock().unwrap();
        let mut items: Vec<Student> = inner.students.values().cloned().collect();
        items.sort_by_key(|s| std::cmp::Reverse(s.id));
        items.truncate(limit as usize);
        Ok(items)
    }

    // 学院模块
    async fn create_faculty(&self, req: CreateFacultyRequest) -> Result<Faculty> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id();
        let now = chrono::Utc::now();
        let faculty = Faculty {
            id,
            name: req.name,
            color: req.color,
            created_at: now,
            updated_at: now,
        };
        inner.faculties.insert(id, faculty.clone());
        Ok(faculty)
    }

    async fn get_faculty_by_id(&self, id: i64) -> Result<Option<Faculty>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.faculties.get(&id).cloned())
    }

    async fn faculty_name_taken(&self, name: &str) -> Result<bool> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .faculties
            .values()
            .any(|f| f.name.eq_ignore_ascii_case(name)))
    }

    async fn list_faculties_with_pagination(
        &self,
        query: FacultyListQuery,
    ) -> Result<FacultyListResponse> {
        let inner = self.inner.lock().unwrap();
        let needle = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut items: Vec<Faculty> = inner
            .faculties
            .values()
            .filter(|f| match &needle {
                Some(n) => {
                    f.name.to_lowercase().contains(n) || f.color.to_lowercase().contains(n)
                }
                None => true,
            })
            .cloned()
            .collect();
        items.sort_by_key(|f| std::cmp::Reverse(f.id));

        let (items, pagination) =
            paginate(items, query.page.unwrap_or(1), query.size.unwrap_or(10));
        Ok(FacultyListResponse { items, pagination })
    }

    async fn update_faculty(
        &self,
        id: i64,
        update: UpdateFacultyRequest,
    ) -> Result<Option<Faculty>> {
        let mut inner = self.inner.lock().unwrap();
        let Some(faculty) = inner.faculties.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            faculty.name = name;
        }
        if let Some(color) = update.color {
            faculty.color = color;
        }
        faculty.updated_at = chrono::Utc::now();

        Ok(Some(faculty.clone()))
    }

    async fn delete_faculty(&self, id: i64) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let removed = inner.faculties.remove(&id).is_some();
        if removed {
            // 模拟外键 SET NULL：学生的学院引用被置空
            for student in inner.students.values_mut() {
                if student.faculty_id == Some(id) {
                    student.faculty_id = None;
                }
            }
        }
        Ok(removed)
    }

    async fn list_faculties_by_color(&self, color: &str) -> Result<Vec<Faculty>> {
        let inner = self.inner.lock().unwrap();
        let mut items: Vec<Faculty> = inner
            .faculties
            .values()
            .filter(|f| f.color.eq_ignore_ascii_case(color))
            .cloned()
            .collect();
        items.sort_by_key(|f| f.id);
        Ok(items)
    }

    async fn search_faculties(&self, query: &str) -> Result<Vec<Faculty>> {
        let inner = self.inner.lock().unwrap();
        let mut items: Vec<Faculty> = inner
            .faculties
            .values()
            .filter(|f| {
                f.name.eq_ignore_ascii_case(query) || f.color.eq_ignore_ascii_case(query)
            })
            .cloned()
            .collect();
        items.sort_by_key(|f| f.id);
        Ok(items)
    }

    // 头像模块
    async fn upsert_avatar(&self, student_id: i64, data: UpsertAvatarData) -> Result<Avatar> {
        let mut inner = self.inner.lock().unwrap();
        let now = chrono::Utc::now();

        let avatar = match inner.avatars.get(&student_id) {
            Some((existing, _)) => Avatar {
                id: existing.id,
                student_id,
                file_path: data.file_path,
                file_size: data.file_size,
                media_type: data.media_type,
                created_at: existing.created_at,
                updated_at: now,
            },
            None => {
                let id = inner.next_id();
                Avatar {
                    id,
                    student_id,
                    file_path: data.file_path,
                    file_size: data.file_size,
                    media_type: data.media_type,
                    created_at: now,
                    updated_at: now,
                }
            }
        };

        inner
            .avatars
            .insert(student_id, (avatar.clone(), data.preview));
        Ok(avatar)
    }

    async fn get_avatar_by_student_id(&self, student_id: i64) -> Result<Option<Avatar>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.avatars.get(&student_id).map(|(a, _)| a.clone()))
    }

    async fn get_avatar_preview(&self, student_id: i64) -> Result<Option<AvatarPreview>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.avatars.get(&student_id).map(|(a, preview)| {
            AvatarPreview {
                data: preview.clone(),
                media_type: a.media_type.clone(),
            }
        }))
    }

    async fn delete_avatar(&self, student_id: i64) -> Result<Option<Avatar>> {
        let mut inner = self.inner.lock().unwrap();
        Ok(inner.avatars.remove(&student_id).map(|(a, _)| a))
    }

    async fn list_avatars_with_pagination(
        &self,
        page: i64,
        size: i64,
    ) -> Result<AvatarPageResponse> {
        let inner = self.inner.lock().unwrap();
        let mut items: Vec<AvatarInfo> = inner
            .avatars
            .values()
            .map(|(a, _)| AvatarInfo {
                id: a.id,
                student_id: a.student_id,
                student_name: inner.students.get(&a.student_id).map(|s| s.name.clone()),
                file_path: a.file_path.clone(),
                file_size: a.file_size,
                media_type: a.media_type.clone(),
            })
            .collect();
        items.sort_by_key(|a| a.id);

        let (items, pagination) = paginate(items, page, size);
        Ok(AvatarPageResponse { items, pagination })
    }
}
