pub mod crew_service;
