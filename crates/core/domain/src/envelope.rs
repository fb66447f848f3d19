//! 解码后的遥测信封与各设备载荷。
//!
//! 信封为每种已知设备类型保留一个 `Option` 载荷槽。观测数据中各载荷
//! 互斥，但模型不做此假设：同一信封可被多个驱动命中。
//! 所有时间均为纳秒（Unix epoch）；可缺省字段统一用 `Option<f64>` 表达
//! "本周期无数据"。

/// 解码后的遥测信封。
#[derive(Debug, Clone, Default)]
pub struct TelemetryEnvelope {
    pub rtac_state: Option<RtacState>,
    pub flexstat_state: Option<FlexstatState>,
    pub parker_state: Option<ParkerState>,
    pub baseline_forecast: Option<BaselineForecast>,
    pub demand_response_forecast: Option<DemandResponseForecast>,
    pub constraints_forecast: Option<ConstraintsForecast>,
    pub rtac_actuation: Option<RtacActuation>,
    pub parker_actuation: Option<ParkerActuation>,
}

/// 微电网控制器（RTAC）状态快照。
#[derive(Debug, Clone, Default)]
pub struct RtacState {
    pub time: i64,
    pub heartbeat: Option<f64>,
    pub real_power_setpoint: Option<f64>,
    pub reactive_power_setpoint: Option<f64>,
    pub target_real_power: Option<f64>,
    pub target_reactive_power: Option<f64>,
    pub battery_total_capacity: Option<f64>,
    pub battery_current_stored_energy: Option<f64>,
    pub total_actual_real_power: Option<f64>,
    pub total_actual_reactive_power: Option<f64>,
    pub total_actual_apparent_power: Option<f64>,
    pub active_power_output_limit: Option<f64>,
    pub current_power_production: Option<f64>,
    pub ac_current_phase_a: Option<f64>,
    pub ac_current_phase_b: Option<f64>,
    pub ac_current_phase_c: Option<f64>,
    pub ac_voltage_ab: Option<f64>,
    pub ac_voltage_bc: Option<f64>,
    pub ac_voltage_ca: Option<f64>,
    pub ac_frequency: Option<f64>,
    pub islanding_state: Option<f64>,
    pub island_type: Option<f64>,
    pub bess_availability: Option<f64>,
    pub fault_condition: Option<f64>,
    pub pge_state: Option<f64>,
    pub pcc_breaker_state: Option<f64>,
    pub pge_voltage: Option<f64>,
    pub pge_frequency: Option<f64>,
    pub bess_pv_breaker_state: Option<f64>,
}

/// FlexStat 恒温器状态快照。
#[derive(Debug, Clone, Default)]
pub struct FlexstatState {
    pub time: i64,
    pub space_temp_sensor: Option<f64>,
    pub minimum_proportional: Option<f64>,
    pub active_cooling_setpt: Option<f64>,
    pub active_heating_setpt: Option<f64>,
    pub unocc_cooling_setpt: Option<f64>,
    pub unocc_heating_setpt: Option<f64>,
    pub occ_min_clg_setpt: Option<f64>,
    pub occ_max_htg_setpt: Option<f64>,
    pub stage_delay: Option<f64>,
    pub fan_shutoff_delay: Option<f64>,
    pub override_timer: Option<f64>,
    pub occ_cooling_setpt: Option<f64>,
    pub occ_heating_setpt: Option<f64>,
    pub current_mode_setpt: Option<f64>,
    pub ui_setpt: Option<f64>,
    pub cooling_need: Option<f64>,
    pub heating_need: Option<f64>,
    pub unocc_min_clg_setpt: Option<f64>,
    pub unocc_max_htg_setpt: Option<f64>,
    pub min_setpt_diff: Option<f64>,
    pub min_setpt_limit: Option<f64>,
    pub space_temp: Option<f64>,
    pub cooling_prop: Option<f64>,
    pub heating_prop: Option<f64>,
    pub cooling_intg: Option<f64>,
    pub heating_intg: Option<f64>,
    pub app_main_type: Option<f64>,
    pub app_sub_type: Option<f64>,
    pub fan_control_type: Option<f64>,
    pub oa_damper_option: Option<f64>,
    pub system_mode: Option<f64>,
    pub fan_speed_output: Option<f64>,
    pub ui_mode: Option<f64>,
    pub temperature_reference: Option<f64>,
    pub fan: Option<f64>,
    pub cool_1: Option<f64>,
    pub cool_2: Option<f64>,
    pub heat_1: Option<f64>,
    pub bo_05: Option<f64>,
    pub bo_06: Option<f64>,
    pub occupancy_mode: Option<f64>,
    pub setpt_override_mode: Option<f64>,
    pub economizer_mode: Option<f64>,
    pub low_limit_condition: Option<f64>,
    pub fan_alarm: Option<f64>,
    pub fan_need: Option<f64>,
    pub heating_cooling_mode: Option<f64>,
    pub occ_fan_auto_on: Option<f64>,
    pub unocc_fan_auto_on: Option<f64>,
    pub f_c_flag: Option<f64>,
    pub fan_status: Option<f64>,
    pub ui_system_mode_active: Option<f64>,
    pub opt_start_enable: Option<f64>,
    pub setback_oat_lockout: Option<f64>,
    pub htg_call_fan: Option<f64>,
}

/// Parker 制冷控制器状态快照。
///
/// 字母数字命名的字段为控制器参数寄存器，沿用设备文档的原始编号。
#[derive(Debug, Clone, Default)]
pub struct ParkerState {
    pub time: i64,
    pub cabinet_temperature: Option<f64>,
    pub evaporator_temperature: Option<f64>,
    pub auxiliary_temperature: Option<f64>,
    pub active_setpoint: Option<f64>,
    pub setpoint: Option<f64>,
    pub compressor_status: Option<f64>,
    pub compressor_working_hours: Option<f64>,
    pub clear_compressor_working_hours: Option<f64>,
    pub compressor_delay: Option<f64>,
    pub second_compressor_state: Option<f64>,
    pub time_until_defrost: Option<f64>,
    pub current_defrost_counter: Option<f64>,
    pub next_defrost_counter: Option<f64>,
    pub defrost_control: Option<f64>,
    pub output_defrost_status: Option<f64>,
    pub output_defrost_state: Option<f64>,
    pub fans_status: Option<f64>,
    pub light_status: Option<f64>,
    pub aux_output_status: Option<f64>,
    pub output_k4_status: Option<f64>,
    pub output_lux_state: Option<f64>,
    pub output_aux_state: Option<f64>,
    pub output_alarm_state: Option<f64>,
    pub on_standby_status: Option<f64>,
    pub door_switch_input_status: Option<f64>,
    pub multipurpose_input_status: Option<f64>,
    pub buzzer_control: Option<f64>,
    pub start_resistors: Option<f64>,
    pub resistors_state: Option<f64>,
    pub resistors_activated_by_aux_key_status: Option<f64>,
    pub evaporator_valve_state: Option<f64>,
    pub energy_saving_status: Option<f64>,
    pub service_request_status: Option<f64>,
    pub num_alarms_in_history: Option<f64>,
    pub door_alarm: Option<f64>,
    pub probe1_failure_alarm: Option<f64>,
    pub probe2_failure_alarm: Option<f64>,
    pub probe3_failure_alarm: Option<f64>,
    pub minimum_temperature_alarm: Option<f64>,
    pub maximum_temperature_alarm: Option<f64>,
    pub condensor_temperature_failure_alarm: Option<f64>,
    pub condensor_pre_alarm: Option<f64>,
    pub multipurpose_input_alarm: Option<f64>,
    pub power_failure_alarm: Option<f64>,
    pub rtc_error_alarm: Option<f64>,
    pub compressor_blocked_alarm: Option<f64>,
    pub energy_saving_regulator_flag: Option<f64>,
    pub energy_saving_real_time_regulator_flag: Option<f64>,
    pub service_request_regulator_flag: Option<f64>,
    pub on_standby_regulator_flag: Option<f64>,
    pub new_alarm_to_read_regulator_flag: Option<f64>,
    pub defrost_status_regulator_flag: Option<f64>,
    pub p2: Option<f64>,
    pub p3: Option<f64>,
    pub r0: Option<f64>,
    pub r1: Option<f64>,
    pub r2: Option<f64>,
    pub r3: Option<f64>,
    pub r4: Option<f64>,
    pub c0: Option<f64>,
    pub c1: Option<f64>,
    pub c2: Option<f64>,
    pub c3: Option<f64>,
    pub c4: Option<f64>,
    pub c5: Option<f64>,
    pub c6: Option<f64>,
    pub c7: Option<f64>,
    pub c8: Option<f64>,
    pub c9: Option<f64>,
    pub d0: Option<f64>,
    pub d1: Option<f64>,
    pub d2: Option<f64>,
    pub d3: Option<f64>,
    pub d4: Option<f64>,
    pub d5: Option<f64>,
    pub d7: Option<f64>,
    pub d8: Option<f64>,
    pub d9: Option<f64>,
    pub da: Option<f64>,
    pub a0: Option<f64>,
    pub a1: Option<f64>,
    pub a2: Option<f64>,
    pub a3: Option<f64>,
    pub a4: Option<f64>,
    pub a5: Option<f64>,
    pub a6: Option<f64>,
    pub a7: Option<f64>,
    pub a8: Option<f64>,
    pub a9: Option<f64>,
    pub f0: Option<f64>,
    pub f1: Option<f64>,
    pub f2: Option<f64>,
    pub f3: Option<f64>,
}

/// 基线功率预测：一条多步序列。
#[derive(Debug, Clone, Default)]
pub struct BaselineForecast {
    pub time: i64,
    pub predictions: Vec<BaselineEntry>,
}

/// 基线预测的单步条目。
#[derive(Debug, Clone, Default)]
pub struct BaselineEntry {
    pub forecast_time: i64,
    pub power: Option<f64>,
}

/// 需求响应信号预测。
#[derive(Debug, Clone, Default)]
pub struct DemandResponseForecast {
    pub time: i64,
    pub predictions: Vec<DemandResponseEntry>,
}

/// 需求响应预测的单步条目。
#[derive(Debug, Clone, Default)]
pub struct DemandResponseEntry {
    pub forecast_time: i64,
    pub price_energy: Option<f64>,
    pub price_demand: Option<f64>,
    pub signal_type: Option<f64>,
    pub power_limit: Option<f64>,
    pub power_track: Option<f64>,
}

/// 运行约束预测（各物理量的上下界）。
#[derive(Debug, Clone, Default)]
pub struct ConstraintsForecast {
    pub time: i64,
    pub predictions: Vec<ConstraintsEntry>,
}

/// 约束预测的单步条目。
#[derive(Debug, Clone, Default)]
pub struct ConstraintsEntry {
    pub forecast_time: i64,
    pub t_rtu_max: Option<f64>,
    pub t_rtu_min: Option<f64>,
    pub t_ref_max: Option<f64>,
    pub t_ref_min: Option<f64>,
    pub t_fre_max: Option<f64>,
    pub t_fre_min: Option<f64>,
    pub soc_max: Option<f64>,
    pub soc_min: Option<f64>,
    pub u_cool_min: Option<f64>,
    pub u_cool_max: Option<f64>,
    pub u_heat_min: Option<f64>,
    pub u_heat_max: Option<f64>,
    pub u_charge_min: Option<f64>,
    pub u_charge_max: Option<f64>,
    pub u_discharge_max: Option<f64>,
    pub u_discharge_min: Option<f64>,
    pub u_ref_min: Option<f64>,
    pub u_ref_max: Option<f64>,
    pub u_fre_cool_min: Option<f64>,
    pub u_fre_cool_max: Option<f64>,
    pub demand: Option<f64>,
    pub u_battery_min: Option<f64>,
    pub u_battery_max: Option<f64>,
    pub p_min: Option<f64>,
    pub p_max: Option<f64>,
}

/// RTAC 执行计划：控制标志 + 未来时段的功率设定。
#[derive(Debug, Clone, Default)]
pub struct RtacActuation {
    pub time: i64,
    pub control_flag: Option<f64>,
    pub setpoints: Vec<RtacSetpoint>,
}

/// RTAC 执行计划的单步条目。
#[derive(Debug, Clone, Default)]
pub struct RtacSetpoint {
    pub change_time: i64,
    pub real_power_setpoint: Option<f64>,
    pub reactive_power_setpoint: Option<f64>,
    pub active_power_output_limit: Option<f64>,
}

/// Parker 执行计划：控制标志 + 未来时段的温度设定。
#[derive(Debug, Clone, Default)]
pub struct ParkerActuation {
    pub time: i64,
    pub control_flag: Option<f64>,
    pub setpoints: Vec<ParkerSetpoint>,
}

/// Parker 执行计划的单步条目。
#[derive(Debug, Clone, Default)]
pub struct ParkerSetpoint {
    pub change_time: i64,
    pub setpoint: Option<f64>,
    pub differential: Option<f64>,
}
