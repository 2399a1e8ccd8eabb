#[path = "../src/mock.rs"]
mod mock;

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
use mock::{I2cMock, I2cTransaction};
use tda7419::{
    configs::{InputSource, SpeakerChannel},
    ll, Config, Error, TransferError, TDA7419,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn full_write(sub_address: u8, tda: &TDA7419) -> I2cTransaction {
    let mut bytes = vec![sub_address];
    bytes.extend_from_slice(&tda.registers().values());
    I2cTransaction::write(ll::ADDRESS, bytes)
}

#[maybe_async::test(not(feature = "async"), async(feature = "async", tokio::test))]
async fn configure_init_then_adjust() {
    init_logger();

    let mut config = Config::default();
    config.mute.soft_mute = false;
    config.master_volume.level = -20;
    config.speakers[SpeakerChannel::LeftFront as usize].level = -3;

    let mut tda = TDA7419::new();
    tda.set_debug(true);
    tda.configure(&config);

    let expected = full_write(0x20, &tda);
    let mut i2c = I2cMock::new(&[
        expected,
        I2cTransaction::write(ll::ADDRESS, vec![0x43, 16 + 25]),
        I2cTransaction::write(ll::ADDRESS, vec![0x4A, 16 + 4]),
        I2cTransaction::write(ll::ADDRESS, vec![0x00, 0x1C]),
    ]);

    tda.init(&mut i2c).await.unwrap();
    assert!(!tda.has_pending_changes());

    tda.set_master_volume(-25);
    tda.set_speaker_volume(SpeakerChannel::LeftFront, -4);
    tda.send_changed_registers(&mut i2c).await.unwrap();

    tda.set_main_source(InputSource::Mute);
    tda.send_changed_registers(&mut i2c).await.unwrap();

    assert_eq!(tda.config().master_volume.level, -25);
    assert!(!tda.topology_changed());

    i2c.done();
}

#[maybe_async::test(not(feature = "async"), async(feature = "async", tokio::test))]
async fn failed_register_is_retried_on_next_call() {
    init_logger();

    let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address);
    let mut i2c = I2cMock::new(&[
        I2cTransaction::write(ll::ADDRESS, vec![0x00, 0x18]).with_error(nack),
        I2cTransaction::write(ll::ADDRESS, vec![0x00, 0x18]),
        I2cTransaction::write(ll::ADDRESS, vec![0x43, 1]),
    ]);

    let mut tda = TDA7419::new();
    tda.set_main_source(InputSource::Qd);
    tda.set_master_volume(1);

    let error = tda.send_changed_registers(&mut i2c).await.unwrap_err();
    assert_eq!(error.kind(), TransferError::AddressNotAcknowledged);
    assert_eq!(error.kind().status(), 2);
    assert!(matches!(error, Error::RegisterWrite { register: 0, .. }));
    assert!(tda.topology_changed());
    assert_eq!(tda.changed_registers().count(), 2);

    tda.send_changed_registers(&mut i2c).await.unwrap();
    assert!(!tda.has_pending_changes());

    i2c.done();
}
