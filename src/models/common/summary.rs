use serde::Serialize;
use std::fmt;

// 各实体的记录数量
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntityCounts {
    pub professors: u64,
    pub courses: u64,
    pub students: u64,
    pub deliverables: u64,
    pub users: u64,
    pub profiles: u64,
}

impl fmt::Display for EntityCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "professors={} courses={} students={} deliverables={} users={} profiles={}",
            self.professors,
            self.courses,
            self.students,
            self.deliverables,
            self.users,
            self.profiles
        )
    }
}
