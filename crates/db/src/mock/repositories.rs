use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbEmployee, DbProject, DbScheduleEntry, DbStatusCode};

// Mock repositories for testing
mock! {
    pub EmployeeRepo {
        pub async fn create_employee(
            &self,
            name: &'static str,
            department: Option<&'static str>,
            position: Option<&'static str>,
            role: &'static str,
        ) -> eyre::Result<DbEmployee>;

        pub async fn get_employee_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbEmployee>>;

        pub async fn list_employees(&self) -> eyre::Result<Vec<DbEmployee>>;

        pub async fn update_employee(
            &self,
            id: Uuid,
            name: Option<&'static str>,
            department: Option<&'static str>,
            position: Option<&'static str>,
            role: Option<&'static str>,
        ) -> eyre::Result<DbEmployee>;

        pub async fn delete_employee(&self, id: Uuid) -> eyre::Result<bool>;
    }
}

mock! {
    pub ScheduleEntryRepo {
        pub async fn upsert_entry(
            &self,
            employee_id: Uuid,
            entry_date: NaiveDate,
            period: &'static str,
            status: &'static str,
            project_code: Option<&'static str>,
            is_highlighted: bool,
            note: Option<&'static str>,
        ) -> eyre::Result<DbScheduleEntry>;

        pub async fn get_entries_by_employee(
            &self,
            employee_id: Uuid,
        ) -> eyre::Result<Vec<DbScheduleEntry>>;

        pub async fn get_entries_in_range(
            &self,
            employee_id: Uuid,
            from: NaiveDate,
            to: NaiveDate,
        ) -> eyre::Result<Vec<DbScheduleEntry>>;

        pub async fn delete_entry(
            &self,
            employee_id: Uuid,
            entry_date: NaiveDate,
            period: &'static str,
        ) -> eyre::Result<bool>;

        pub async fn delete_entries_by_employee(
            &self,
            employee_id: Uuid,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub ProjectRepo {
        pub async fn create_project(
            &self,
            code: &'static str,
            name: &'static str,
        ) -> eyre::Result<DbProject>;

        pub async fn get_project_by_code(
            &self,
            code: &'static str,
        ) -> eyre::Result<Option<DbProject>>;

        pub async fn list_projects(&self) -> eyre::Result<Vec<DbProject>>;

        pub async fn delete_project(&self, code: &'static str) -> eyre::Result<bool>;
    }
}

mock! {
    pub StatusCodeRepo {
        pub async fn create_status_code(
            &self,
            code: &'static str,
            label: &'static str,
        ) -> eyre::Result<DbStatusCode>;

        pub async fn get_status_code(
            &self,
            code: &'static str,
        ) -> eyre::Result<Option<DbStatusCode>>;

        pub async fn list_status_codes(&self) -> eyre::Result<Vec<DbStatusCode>>;

        pub async fn delete_status_code(&self, code: &'static str) -> eyre::Result<bool>;
    }
}
