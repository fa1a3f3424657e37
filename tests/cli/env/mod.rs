mod env_uuid_injection_contract;
mod idempotent_output_contract;
mod js_module_config_contract;
