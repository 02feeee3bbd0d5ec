use chip8_core::{CYCLES_PER_FRAME, Cpu, CycleState, Error, MachineConfig, RomBuffer};

fn boot(rom: &[u8]) -> Cpu {
    let mut cpu = Cpu::new(MachineConfig::default().with_rng_seed(0xC8)).unwrap();
    cpu.load_rom(&RomBuffer::from(rom)).unwrap();
    cpu
}

fn run(cpu: &mut Cpu, cycles: usize) {
    for _ in 0..cycles {
        assert_eq!(cpu.cycle().unwrap(), CycleState::Executed);
    }
}

#[test]
fn adds_two_registers() {
    let mut cpu = boot(&[0x60, 0x0A, 0x61, 0x05, 0x80, 0x14]);
    run(&mut cpu, 3);
    assert_eq!(cpu.registers().get_register(0), 15);
    assert_eq!(cpu.registers().get_register(1), 5);
    assert_eq!(cpu.registers().get_flag(), 0);
    assert_eq!(cpu.program_counter(), 0x206);
}

#[test]
fn load_then_skip_jumps_over_one_instruction() {
    let mut cpu = boot(&[0x63, 0x42, 0x33, 0x42, 0x63, 0x00, 0x64, 0x01]);
    run(&mut cpu, 3);
    assert_eq!(cpu.registers().get_register(3), 0x42);
    assert_eq!(cpu.registers().get_register(4), 0x01);
    assert_eq!(cpu.program_counter(), 0x208);
}

#[test]
fn carry_keeps_the_low_byte() {
    let mut cpu = boot(&[0x60, 0xF0, 0x61, 0x20, 0x80, 0x14]);
    run(&mut cpu, 3);
    assert_eq!(cpu.registers().get_register(0), 0x10);
    assert_eq!(cpu.registers().get_flag(), 1);
}

#[test]
fn shift_right_keeps_the_dropped_bit() {
    let mut cpu = boot(&[0x65, 0x0B, 0x85, 0x06]);
    run(&mut cpu, 2);
    assert_eq!(cpu.registers().get_register(5), 0x05);
    assert_eq!(cpu.registers().get_flag(), 1);
}

#[test]
fn call_and_return() {
    // 0x200: call 0x206
    // 0x202: v1 = 1
    // 0x204: jump 0x204
    // 0x206: v0 = 9, return
    let mut cpu = boot(&[
        0x22, 0x06, 0x61, 0x01, 0x12, 0x04, 0x60, 0x09, 0x00, 0xEE,
    ]);
    cpu.cycle().unwrap();
    assert_eq!(cpu.stack_pointer(), 1);
    assert_eq!(cpu.program_counter(), 0x206);

    run(&mut cpu, 2);
    assert_eq!(cpu.stack_pointer(), 0);
    assert_eq!(cpu.program_counter(), 0x202);

    run(&mut cpu, 1);
    assert_eq!(cpu.registers().get_register(0), 9);
    assert_eq!(cpu.registers().get_register(1), 1);
}

#[test]
fn stores_binary_coded_decimal() {
    // v2 = 157, I = 0x300, bcd v2
    let mut cpu = boot(&[0x62, 0x9D, 0xA3, 0x00, 0xF2, 0x33]);
    run(&mut cpu, 3);
    assert_eq!(cpu.memory().slice(0x300, 3).unwrap(), &[1, 5, 7]);
    assert_eq!(cpu.registers().get_index_register(), 0x300);
}

#[test]
fn registers_survive_a_store_and_load() {
    let mut cpu = boot(&[
        0x60, 0x11, 0x61, 0x22, 0x62, 0x33, // v0..v2
        0xA4, 0x00, 0xF2, 0x55, // I = 0x400, store v0..v2
        0x60, 0x00, 0x61, 0x00, 0x62, 0x00, // wipe v0..v2
        0xF2, 0x65, // load v0..v2
    ]);
    run(&mut cpu, 9);
    assert_eq!(cpu.registers().as_slice()[..3], [0x11, 0x22, 0x33]);
    assert_eq!(cpu.registers().get_index_register(), 0x400);
}

#[test]
fn drawing_a_glyph_twice_erases_it() {
    // v0 = 8, I = glyph 8, draw it twice at (v0, v0)
    let mut cpu = boot(&[0x60, 0x08, 0xF0, 0x29, 0xD0, 0x05, 0xD0, 0x05]);
    run(&mut cpu, 3);
    assert!(cpu.take_redraw());
    assert!(cpu.framebuffer().pixel(8, 8));
    assert_eq!(cpu.registers().get_flag(), 0);

    run(&mut cpu, 1);
    assert!(cpu.framebuffer().is_blank());
    assert_eq!(cpu.registers().get_flag(), 1);
}

#[test]
fn waits_for_a_key_across_frames() {
    // wait for a key in v4, then load the delay timer into v5
    let mut cpu = boot(&[0xF4, 0x0A, 0x65, 0x33, 0xF5, 0x15]);
    for _ in 0..3 {
        assert_eq!(
            cpu.run_frame(CYCLES_PER_FRAME).unwrap(),
            CycleState::WaitingForKey { register: 4 }
        );
    }
    cpu.set_key_state(0x7, true).unwrap();
    cpu.run_frame(3).unwrap();
    assert_eq!(cpu.registers().get_register(4), 0x7);
    // the frame ticks once after setting the delay timer
    assert_eq!(cpu.registers().get_delay_timer(), 0x32);
}

#[test]
fn same_seed_same_numbers() {
    let rom = [0xC0, 0xFF, 0xC1, 0xFF, 0xC2, 0xFF, 0xC3, 0xFF];
    let mut first = boot(&rom);
    let mut second = boot(&rom);
    run(&mut first, 4);
    run(&mut second, 4);
    assert_eq!(
        first.registers().as_slice()[..4],
        second.registers().as_slice()[..4]
    );
}

#[test]
fn bad_programs_report_errors() {
    let mut cpu = boot(&[0x00, 0xEE]);
    assert!(matches!(cpu.cycle(), Err(Error::StackUnderflow)));

    let mut cpu = boot(&[0x5A, 0xB1]);
    assert!(matches!(
        cpu.cycle(),
        Err(Error::UnknownOpcode { opcode: 0x5AB1 })
    ));

    let mut cpu = boot(&[]);
    assert!(matches!(
        cpu.set_key_state(0x10, true),
        Err(Error::InvalidKey { key: 0x10 })
    ));
}

#[test]
fn bad_configurations_are_rejected() {
    let config = MachineConfig::default().with_font_set_start_address(0xFF0);
    assert!(matches!(Cpu::new(config), Err(Error::InvalidConfig(_))));
}
