pub mod crew_form;
