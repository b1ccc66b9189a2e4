//! Tests for the use-case services


mod auth_service_tests;
