// This file is part of Dabble.
// Copyright (C) 2023 the Dabble developers
//
// Dabble is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Dabble is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Dabble.  If not, see <https://www.gnu.org/licenses/>.

pub mod brush;
pub mod paint;
pub mod preview;
