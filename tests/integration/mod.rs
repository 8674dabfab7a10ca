mod browse_scenario;
mod cli_contract;
mod support;
