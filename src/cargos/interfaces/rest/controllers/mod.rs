pub mod cargos_rest_controller;
