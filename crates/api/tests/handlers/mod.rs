mod employee_test;
mod middleware_test;
mod schedule_test;
mod stats_test;
