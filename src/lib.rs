// Library root: 통합 테스트와 바이너리가 함께 사용
pub mod docs;
pub mod domains;
pub mod routes;
pub mod shared;
