use crate::{i2c_type, ll, maybe_async_attr, Error, TDA7419};

impl TDA7419 {
    /// Brings the device in line with the register file
    ///
    /// Sends all registers. Meant to be called once after power-up, before
    /// switching to [`TDA7419::send_changed_registers`].
    #[maybe_async_attr]
    pub async fn init<I2C>(&mut self, i2c: &mut I2C) -> Result<(), Error<I2C>>
    where
        I2C: i2c_type::i2c::I2c,
    {
        self.send_all_registers(i2c).await
    }

    /// Sends the whole register file in a single bus transaction
    ///
    /// On success every register counts as committed and the topology change
    /// is consumed. On failure nothing changes, so all pending registers are
    /// still pending.
    #[maybe_async_attr]
    pub async fn send_all_registers<I2C>(&mut self, i2c: &mut I2C) -> Result<(), Error<I2C>>
    where
        I2C: i2c_type::i2c::I2c,
    {
        if self.debug {
            debug!("sending all registers");
            self.ll.dump();
        }

        let mut buffer = [0; ll::REGISTER_COUNT + 1];
        buffer[0] = ll::full_write_sub_address(self.topology_changed);
        buffer[1..].copy_from_slice(&self.ll.values());

        if let Err(error) = i2c.write(ll::ADDRESS, &buffer).await {
            error!("full register write failed");
            return Err(Error::FullWrite(error));
        }

        self.ll.clear_changed();
        self.topology_changed = false;

        Ok(())
    }

    /// Sends every changed register, one bus transaction each
    ///
    /// Registers are sent in ascending order. The first failure aborts the
    /// call: registers sent before it stay committed, the failing one and all
    /// later ones stay pending. Nothing is sent if nothing changed.
    #[maybe_async_attr]
    pub async fn send_changed_registers<I2C>(&mut self, i2c: &mut I2C) -> Result<(), Error<I2C>>
    where
        I2C: i2c_type::i2c::I2c,
    {
        if self.debug {
            debug!("sending changed registers");
            self.ll.dump();
        }

        for index in 0..ll::REGISTER_COUNT as u8 {
            let field = self.ll.field(index);
            if !field.is_changed() {
                continue;
            }

            let buffer = [
                ll::register_sub_address(index, self.topology_changed),
                field.value(),
            ];

            if let Err(error) = i2c.write(ll::ADDRESS, &buffer).await {
                error!("write of register {} failed", index);
                return Err(Error::RegisterWrite {
                    register: index,
                    error,
                });
            }

            self.ll.field_mut(index).clear_changed();
            if index == ll::TOPOLOGY_REGISTER {
                self.topology_changed = false;
            }
        }

        Ok(())
    }
}
