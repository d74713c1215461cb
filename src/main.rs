// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.

//! The main entry point for the echo lambda function.

use echo_function::error::Result;
use echo_function::handler;
use lambda_runtime::service_fn;

#[tokio::main]
async fn main() -> Result<()> {
    // The logger is configured once per process; the handler only speaks to
    // the `log` facade. Level selection comes from `RUST_LOG`.
    env_logger::init();
    lambda_runtime::run(service_fn(handler::handle)).await?;
    Ok(())
}
